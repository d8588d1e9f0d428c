//! Browser implementations of the runtime environment traits.
//!
//! Every implementation is total: a detached document, blocked storage or a
//! missing `matchMedia` degrades to a no-op (or the light scheme) rather
//! than an error, matching the trait contracts. The window is re-queried on
//! every call instead of cached so nothing here holds a JS reference across
//! frames.

use shadekit_core::ResolvedMode;
use shadekit_runtime::{KeyValueStore, StyleTarget, SystemScheme};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, MediaQueryList, MediaQueryListEvent, Storage};

use crate::{DARK_CLASS, STYLE_ELEMENT_ID};

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn dark_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// [`StyleTarget`] over the real document.
///
/// The stylesheet lives in a single `<style id="shadekit-styles">` element
/// in `<head>`, upserted in place; the dark class is toggled on the root
/// element.
#[derive(Debug, Default, Clone, Copy)]
pub struct DomStyleTarget;

impl DomStyleTarget {
    #[must_use]
    pub fn new() -> Self {
        DomStyleTarget
    }
}

impl StyleTarget for DomStyleTarget {
    fn inject(&mut self, css: &str) {
        if upsert_style(css).is_none() {
            warn!("no document available; style injection skipped");
        }
    }

    fn clear(&mut self) {
        if let Some(document) = document()
            && let Some(element) = document.get_element_by_id(STYLE_ELEMENT_ID)
        {
            element.remove();
        }
    }

    fn set_dark(&mut self, dark: bool) {
        let Some(root) = document().and_then(|d| d.document_element()) else {
            return;
        };
        let class_list = root.class_list();
        let result = if dark {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            warn!("failed to toggle dark class on root element");
        }
    }
}

fn upsert_style(css: &str) -> Option<()> {
    let document = document()?;
    let element = match document.get_element_by_id(STYLE_ELEMENT_ID) {
        Some(element) => element,
        None => {
            let element = document.create_element("style").ok()?;
            element.set_id(STYLE_ELEMENT_ID);
            document.head()?.append_child(&element).ok()?;
            element
        }
    };
    element.set_text_content(Some(css));
    Some(())
}

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Storage may be absent or throw (private browsing, embedding policy);
/// every failure degrades silently per the trait contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

impl LocalStore {
    #[must_use]
    pub fn new() -> Self {
        LocalStore
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    debug!(key = %key, "localStorage write rejected");
                }
            }
            None => debug!(key = %key, "localStorage unavailable; write dropped"),
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// [`SystemScheme`] over `matchMedia("(prefers-color-scheme: dark)")`.
///
/// Hosts without `matchMedia` report the light scheme.
#[derive(Debug, Default, Clone, Copy)]
pub struct MediaScheme;

impl MediaScheme {
    #[must_use]
    pub fn new() -> Self {
        MediaScheme
    }
}

impl SystemScheme for MediaScheme {
    fn current(&self) -> ResolvedMode {
        match dark_query() {
            Some(query) if query.matches() => ResolvedMode::Dark,
            _ => ResolvedMode::Light,
        }
    }
}

/// A live listener on the OS scheme media query.
///
/// Dropping the subscription detaches the listener, so holding it only
/// while the mode intent is `system` gives exactly the reactivity the
/// controller wants.
pub struct SchemeSubscription {
    query: MediaQueryList,
    closure: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl SchemeSubscription {
    /// Attach `on_change`; `None` when the host has no `matchMedia`.
    pub fn subscribe(
        mut on_change: impl FnMut(ResolvedMode) + 'static,
    ) -> Option<SchemeSubscription> {
        let query = dark_query()?;
        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            let resolved = if event.matches() {
                ResolvedMode::Dark
            } else {
                ResolvedMode::Light
            };
            on_change(resolved);
        }) as Box<dyn FnMut(MediaQueryListEvent)>);
        query
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(SchemeSubscription { query, closure })
    }
}

impl Drop for SchemeSubscription {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.closure.as_ref().unchecked_ref());
    }
}
