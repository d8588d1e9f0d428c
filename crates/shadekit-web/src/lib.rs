#![forbid(unsafe_code)]

//! Browser frontend for shadekit.
//!
//! # Role in shadekit
//! `shadekit-web` binds the host-agnostic controller in `shadekit-runtime`
//! to a real browser: stylesheet upserts into `<head>`, a `dark` class on
//! the root element, `localStorage` persistence, and a `prefers-color-scheme`
//! listener. The [`provider`] module exports all of it to JavaScript as a
//! single `ThemeProvider` class via wasm-bindgen.
//!
//! [`options`] is plain serde and compiles on every target, so option
//! parsing is tested on the host; only the DOM bindings are wasm-gated.

/// Provider options parsing and preset resolution.
pub mod options;

/// DOM implementations of the environment traits.
#[cfg(target_arch = "wasm32")]
pub mod dom;
/// The wasm-bindgen `ThemeProvider` export.
#[cfg(target_arch = "wasm32")]
pub mod provider;

pub use options::{ProviderOptions, ThemeSource};

#[cfg(target_arch = "wasm32")]
pub use provider::ThemeProvider;

/// `id` of the managed `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "shadekit-styles";

/// Class applied to the root element while dark mode is showing.
pub const DARK_CLASS: &str = "dark";
