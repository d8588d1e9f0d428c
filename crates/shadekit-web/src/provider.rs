//! The `ThemeProvider` class exported to JavaScript.
//!
//! Constructing a provider mounts a [`ThemeController`] over the real DOM:
//! it injects the stylesheet, applies the dark class, and, while the mode
//! intent is `system`, listens for OS scheme changes. Options come in as a
//! plain JS object and are round-tripped through JSON so they share the
//! serde path (and validation) with every other config source.

use std::cell::RefCell;
use std::rc::Rc;

use shadekit_core::Mode;
use shadekit_runtime::ThemeController;
use wasm_bindgen::prelude::*;

use crate::dom::{DomStyleTarget, LocalStore, MediaScheme, SchemeSubscription};
use crate::options::ProviderOptions;

type Controller = ThemeController<DomStyleTarget, LocalStore, MediaScheme>;

/// Theme state owner for a page. One instance per document.
#[wasm_bindgen]
pub struct ThemeProvider {
    controller: Rc<RefCell<Controller>>,
    subscription: Option<SchemeSubscription>,
}

#[wasm_bindgen]
impl ThemeProvider {
    /// Mount with the given options object (or none for the defaults).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<ThemeProvider, JsError> {
        let options = parse_options(options)?;
        let config = options
            .into_config()
            .map_err(|err| JsError::new(&err.to_string()))?;
        let controller = Controller::mount(
            config,
            DomStyleTarget::new(),
            LocalStore::new(),
            MediaScheme::new(),
        );
        let mut provider = ThemeProvider {
            controller: Rc::new(RefCell::new(controller)),
            subscription: None,
        };
        provider.sync_subscription();
        Ok(provider)
    }

    /// Current mode intent: `"light"`, `"dark"` or `"system"`.
    pub fn mode(&self) -> String {
        self.controller.borrow().mode().as_str().to_string()
    }

    /// What is actually showing: `"light"` or `"dark"`.
    #[wasm_bindgen(js_name = resolvedMode)]
    pub fn resolved_mode(&self) -> String {
        self.controller.borrow().resolved_mode().as_str().to_string()
    }

    /// Name of the active theme.
    #[wasm_bindgen(js_name = themeName)]
    pub fn theme_name(&self) -> String {
        self.controller.borrow().theme().name().to_string()
    }

    /// Names of all configured themes, in configuration order.
    #[wasm_bindgen(js_name = themeNames)]
    pub fn theme_names(&self) -> Vec<String> {
        self.controller
            .borrow()
            .themes()
            .iter()
            .map(|theme| theme.name().to_string())
            .collect()
    }

    /// The CSS text currently injected for the active theme.
    #[wasm_bindgen(js_name = cssText)]
    pub fn css_text(&self) -> String {
        shadekit_core::render_dual_mode(self.controller.borrow().theme())
    }

    /// Set the mode intent. Rejects anything but the three mode strings.
    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsError> {
        let mode = Mode::parse(mode)
            .ok_or_else(|| JsError::new("mode must be \"light\", \"dark\" or \"system\""))?;
        self.controller.borrow_mut().set_mode(mode);
        self.sync_subscription();
        Ok(())
    }

    /// Flip to the opposite of what is currently showing.
    #[wasm_bindgen(js_name = toggleMode)]
    pub fn toggle_mode(&mut self) {
        self.controller.borrow_mut().toggle_mode();
        self.sync_subscription();
    }

    /// Activate a configured theme by name. Unknown names are ignored.
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&mut self, name: &str) {
        self.controller.borrow_mut().set_theme(name);
    }

    /// Remove the stylesheet, the dark class and the scheme listener.
    ///
    /// Consumes the provider; the JS object is unusable afterwards.
    pub fn unmount(mut self) {
        self.subscription = None;
        if let Ok(cell) = Rc::try_unwrap(self.controller) {
            cell.into_inner().unmount();
        }
    }
}

impl ThemeProvider {
    /// Hold a scheme listener exactly while the intent is `system`.
    fn sync_subscription(&mut self) {
        let follow_system = self.controller.borrow().mode() == Mode::System;
        if follow_system && self.subscription.is_none() {
            let controller = Rc::clone(&self.controller);
            self.subscription = SchemeSubscription::subscribe(move |resolved| {
                controller.borrow_mut().handle_scheme_change(resolved);
            });
        } else if !follow_system {
            self.subscription = None;
        }
    }
}

fn parse_options(options: JsValue) -> Result<ProviderOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        return Ok(ProviderOptions::default());
    }
    let json = js_sys::JSON::stringify(&options)
        .map_err(|_| JsError::new("options are not JSON-serializable"))?;
    serde_json::from_str(&String::from(json)).map_err(|err| JsError::new(&err.to_string()))
}
