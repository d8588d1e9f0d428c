#![forbid(unsafe_code)]

//! Host-driven theming runtime for shadekit.
//!
//! # Role in shadekit
//! `shadekit-runtime` sits between the pure vocabulary in `shadekit-core`
//! and a concrete host: it owns the reactive theme state and pushes it out
//! through small environment traits instead of touching any platform API
//! itself. `shadekit-web` supplies browser implementations of those traits;
//! tests and headless hosts use the in-memory ones shipped here.
//!
//! # This crate provides
//! - [`env`]: the [`StyleTarget`], [`KeyValueStore`] and [`SystemScheme`]
//!   capability traits plus memory and null implementations.
//! - [`persist`]: preference reads and writes over any [`KeyValueStore`].
//! - [`controller`]: [`ThemeController`], the mode/theme state machine.
//!
//! Everything here is deterministic and synchronous; the host decides when
//! events (an OS scheme change, a user click) reach the controller.

/// The reactive theme controller.
pub mod controller;
/// Environment capability traits and deterministic implementations.
pub mod env;
/// Preference persistence over a key-value store.
pub mod persist;

pub use controller::{ControllerConfig, ThemeController};
pub use env::{
    FixedScheme, KeyValueStore, MemoryStore, MemoryStyleTarget, NullStore, NullStyleTarget,
    StyleTarget, SystemScheme,
};
pub use persist::{read_mode, read_theme, remove_mode, remove_theme, write_mode, write_theme};
