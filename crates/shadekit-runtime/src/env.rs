//! Host environment capabilities.
//!
//! The controller never talks to a browser directly; it drives these three
//! traits. `shadekit-web` implements them over the real DOM, tests and
//! headless hosts use the in-memory implementations here, and restricted
//! environments use the null implementations, which satisfy the contract by
//! doing nothing.

use std::collections::HashMap;

use shadekit_core::ResolvedMode;

/// Where emitted CSS and the dark class end up.
///
/// `inject` is an idempotent upsert: re-injection replaces prior content and
/// never accumulates. Implementations must be total — a missing document is
/// expressed as a no-op, not an error.
pub trait StyleTarget {
    /// Upsert the managed stylesheet to exactly `css`.
    fn inject(&mut self, css: &str);
    /// Remove the managed stylesheet; no-op if absent.
    fn clear(&mut self);
    /// Apply or remove the dark visual class.
    fn set_dark(&mut self, dark: bool);
}

/// Flat string key-value persistence.
///
/// Best-effort by contract: `set`/`remove` swallow quota and availability
/// failures, `get` answers `None` for anything unreadable. Callers must
/// never observe an error from persistence.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Read access to the OS light/dark preference.
pub trait SystemScheme {
    /// Current preference; hosts without the capability answer `Light`.
    fn current(&self) -> ResolvedMode;
}

/// Deterministic in-memory style target. Records what a document would show.
#[derive(Debug, Default, Clone)]
pub struct MemoryStyleTarget {
    css: Option<String>,
    dark: bool,
    inject_count: usize,
}

impl MemoryStyleTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of the injected stylesheet, if present.
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// Whether the dark class is currently applied.
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Number of `inject` calls observed. There is never more than one
    /// stylesheet regardless of this count.
    pub fn inject_count(&self) -> usize {
        self.inject_count
    }
}

impl StyleTarget for MemoryStyleTarget {
    fn inject(&mut self, css: &str) {
        self.inject_count += 1;
        self.css = Some(css.to_string());
    }

    fn clear(&mut self) {
        self.css = None;
    }

    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}

/// Style target for non-document contexts. Every operation is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStyleTarget;

impl StyleTarget for NullStyleTarget {
    fn inject(&mut self, _css: &str) {}
    fn clear(&mut self) {}
    fn set_dark(&mut self, _dark: bool) {}
}

/// Deterministic in-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// A disabled store: reads absent, writes vanish. Models storage being
/// blocked (private browsing, policy) without surfacing errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStore;

impl KeyValueStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&mut self, _key: &str, _value: &str) {}
    fn remove(&mut self, _key: &str) {}
}

/// Fixed OS preference, for tests and hosts without a preference query.
#[derive(Debug, Clone, Copy)]
pub struct FixedScheme(pub ResolvedMode);

impl Default for FixedScheme {
    fn default() -> Self {
        FixedScheme(ResolvedMode::Light)
    }
}

impl SystemScheme for FixedScheme {
    fn current(&self) -> ResolvedMode {
        self.0
    }
}
