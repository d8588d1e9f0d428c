//! Reading and writing theme preferences through a [`KeyValueStore`].
//!
//! Keys are derived in `shadekit-core` from a sanitized base key plus a
//! fixed suffix, so any backend sees the same layout. Reads are strict:
//! only the exact strings `light`/`dark`/`system` parse as a mode, and an
//! unparseable entry reads as absent.

use shadekit_core::{Mode, mode_key, theme_key};
use tracing::debug;

use crate::env::KeyValueStore;

/// Persisted mode under `base`, if present and well-formed.
pub fn read_mode<S: KeyValueStore>(store: &S, base: &str) -> Option<Mode> {
    let key = mode_key(base);
    let raw = store.get(&key)?;
    let mode = Mode::parse(&raw);
    if mode.is_none() {
        debug!(key = %key, value = %raw, "ignoring unparseable persisted mode");
    }
    mode
}

/// Persist `mode` under `base`. Best-effort.
pub fn write_mode<S: KeyValueStore>(store: &mut S, base: &str, mode: Mode) {
    let key = mode_key(base);
    debug!(key = %key, mode = %mode, "persisting mode");
    store.set(&key, mode.as_str());
}

/// Remove the persisted mode under `base`.
pub fn remove_mode<S: KeyValueStore>(store: &mut S, base: &str) {
    store.remove(&mode_key(base));
}

/// Persisted theme name under `base`, if present.
pub fn read_theme<S: KeyValueStore>(store: &S, base: &str) -> Option<String> {
    store.get(&theme_key(base))
}

/// Persist the active theme name under `base`. Best-effort.
pub fn write_theme<S: KeyValueStore>(store: &mut S, base: &str, name: &str) {
    let key = theme_key(base);
    debug!(key = %key, theme = %name, "persisting theme");
    store.set(&key, name);
}

/// Remove the persisted theme name under `base`.
pub fn remove_theme<S: KeyValueStore>(store: &mut S, base: &str) {
    store.remove(&theme_key(base));
}
