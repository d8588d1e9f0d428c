//! The reactive mode/theme controller.
//!
//! [`ThemeController`] owns the active theme, the user's mode intent, and
//! the resolved light/dark state, and pushes every change out through the
//! environment traits. It is generic over [`StyleTarget`], [`KeyValueStore`]
//! and [`SystemScheme`], so the same state machine runs against a browser
//! document and against the in-memory test environment.
//!
//! State precedence at mount is persisted value, then configured default,
//! then built-in default. Every mode or theme change writes through to the
//! store and re-injects the active theme's stylesheet; injection is an
//! idempotent upsert, so repeats are safe.

use shadekit_core::{Mode, Preset, ResolvedMode, ThemeConfig, render_dual_mode};
use tracing::{debug, warn};

use crate::env::{KeyValueStore, StyleTarget, SystemScheme};
use crate::persist;

/// Configuration for [`ThemeController::mount`].
///
/// `themes` wins over `theme` when non-empty; when both are empty the
/// controller falls back to the `default` preset. `storage_key` pins
/// persistence to one base key regardless of which theme is active;
/// without it, writes are keyed by the active theme's name.
#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    /// Single theme shorthand, used when `themes` is empty.
    pub theme: Option<ThemeConfig>,
    /// Full theme list; the first entry is the fallback active theme.
    pub themes: Vec<ThemeConfig>,
    /// Name of the theme to activate when nothing is persisted.
    pub default_theme: Option<String>,
    /// Mode intent when nothing is persisted. Defaults to [`Mode::System`].
    pub default_mode: Mode,
    /// Fixed persistence base key, overriding the theme-name default.
    pub storage_key: Option<String>,
}

/// Owns theme state and mirrors it into the host environment.
#[derive(Debug)]
pub struct ThemeController<T, S, Y> {
    target: T,
    store: S,
    scheme: Y,
    themes: Vec<ThemeConfig>,
    active: usize,
    mode: Mode,
    resolved: ResolvedMode,
    storage_key: Option<String>,
}

impl<T: StyleTarget, S: KeyValueStore, Y: SystemScheme> ThemeController<T, S, Y> {
    /// Bring the environment in sync with persisted and configured state.
    ///
    /// Never fails: a persisted theme name that matches no configured theme
    /// is ignored, a corrupt persisted mode reads as absent, and an empty
    /// config falls back to the `default` preset. Mounting injects the
    /// active theme's stylesheet and applies the dark class.
    pub fn mount(config: ControllerConfig, target: T, store: S, scheme: Y) -> Self {
        let themes = if !config.themes.is_empty() {
            config.themes
        } else if let Some(theme) = config.theme {
            vec![theme]
        } else {
            vec![Preset::Default.theme().clone()]
        };

        let base = config
            .storage_key
            .clone()
            .unwrap_or_else(|| themes[0].name().to_string());

        let active = persist::read_theme(&store, &base)
            .or_else(|| config.default_theme.clone())
            .and_then(|name| themes.iter().position(|t| t.name() == name))
            .unwrap_or(0);

        let mode = persist::read_mode(&store, &base).unwrap_or(config.default_mode);
        let resolved = mode.resolve_with(scheme.current());

        let mut controller = ThemeController {
            target,
            store,
            scheme,
            themes,
            active,
            mode,
            resolved,
            storage_key: config.storage_key,
        };
        debug!(
            theme = %controller.theme().name(),
            mode = %controller.mode,
            resolved = %controller.resolved,
            "mounting theme controller"
        );
        controller.apply();
        controller
    }

    /// The user's current mode intent.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The light/dark state currently applied.
    pub fn resolved_mode(&self) -> ResolvedMode {
        self.resolved
    }

    /// The active theme.
    pub fn theme(&self) -> &ThemeConfig {
        &self.themes[self.active]
    }

    /// All configured themes, in configuration order.
    pub fn themes(&self) -> &[ThemeConfig] {
        &self.themes
    }

    /// The style target, for inspection.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The persistence store, for inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set the mode intent, persist it, and re-apply the environment.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        let base = self.base_key();
        persist::write_mode(&mut self.store, &base, mode);
        self.resolved = mode.resolve_with(self.scheme.current());
        self.apply();
        debug!(mode = %self.mode, resolved = %self.resolved, "mode set");
    }

    /// Flip to the opposite of what is currently showing.
    ///
    /// From an explicit mode this moves to the other explicit mode. From
    /// [`Mode::System`] it moves to the explicit opposite of the resolved
    /// state, so the first toggle always produces a visible change.
    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            Mode::Light => Mode::Dark,
            Mode::Dark => Mode::Light,
            Mode::System => self.resolved.opposite().into(),
        };
        self.set_mode(next);
    }

    /// Activate the configured theme named `name`.
    ///
    /// An unknown name is logged and ignored. Activation persists the
    /// selection and replaces the injected stylesheet.
    pub fn set_theme(&mut self, name: &str) {
        let Some(index) = self.themes.iter().position(|t| t.name() == name) else {
            warn!(theme = %name, "ignoring unknown theme");
            return;
        };
        self.active = index;
        let base = self.base_key();
        persist::write_theme(&mut self.store, &base, name);
        self.apply();
        debug!(theme = %name, "theme set");
    }

    /// React to an OS preference change.
    ///
    /// Only meaningful while the intent is [`Mode::System`]; explicit modes
    /// ignore the OS. Never persists anything.
    pub fn handle_scheme_change(&mut self, system: ResolvedMode) {
        if self.mode != Mode::System || self.resolved == system {
            return;
        }
        self.resolved = system;
        self.target.set_dark(system.is_dark());
        debug!(resolved = %system, "followed system scheme change");
    }

    /// Tear down: remove the injected stylesheet and the dark class.
    ///
    /// Returns the style target so callers can verify or reuse it.
    pub fn unmount(mut self) -> T {
        self.target.clear();
        self.target.set_dark(false);
        self.target
    }

    fn base_key(&self) -> String {
        match &self.storage_key {
            Some(key) => key.clone(),
            None => self.theme().name().to_string(),
        }
    }

    fn apply(&mut self) {
        self.inject();
        self.target.set_dark(self.resolved.is_dark());
    }

    fn inject(&mut self) {
        let css = render_dual_mode(self.theme());
        self.target.inject(&css);
    }
}
