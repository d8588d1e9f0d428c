//! Error type for theme construction and preset lookup.
//!
//! These are configuration-time errors: they surface synchronously to the
//! caller and are never retried or swallowed. Environment-availability
//! failures (missing document, disabled storage) are deliberately not
//! errors anywhere in this workspace; those paths degrade to no-ops.

use std::fmt;

use crate::palette::{PaletteLabel, Slot};

/// Errors raised while building themes or looking up presets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A color literal failed whitelist validation.
    InvalidColor {
        /// The palette slot holding the rejected literal.
        slot: Slot,
        /// Which palette of the theme was being sanitized.
        palette: PaletteLabel,
        /// The rejected literal, verbatim.
        value: String,
    },
    /// Theme name empty or containing characters outside `[A-Za-z0-9_-]`.
    InvalidName(String),
    /// Preset lookup with an unrecognized name.
    UnknownPreset(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColor { slot, palette, value } => {
                write!(f, "invalid color for \"{slot}\" in {palette} palette: \"{value}\"")
            }
            Self::InvalidName(name) => {
                write!(
                    f,
                    "invalid theme name \"{name}\": must be non-empty and contain only \
                     letters, digits, underscores, and hyphens"
                )
            }
            Self::UnknownPreset(name) => write!(f, "unknown preset: \"{name}\""),
        }
    }
}

impl std::error::Error for ThemeError {}
