//! Color palettes: 19 fixed semantic slots, validated on construction,
//! immutable afterwards.
//!
//! A [`Palette`] is only ever produced by [`Palette::sanitize`] (all-or-
//! nothing validation of a [`PaletteSpec`]) or by overlaying one palette on
//! another with [`Palette::merge_overlay`] (best-effort, invalid overrides
//! dropped). Updates always return a new palette.

use std::borrow::Cow;
use std::fmt;

use tracing::warn;

use crate::color;
use crate::error::ThemeError;

/// One of the 19 fixed semantic palette slots, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Background,
    Foreground,
    Card,
    CardForeground,
    Popover,
    PopoverForeground,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Muted,
    MutedForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Border,
    Input,
    Ring,
}

impl Slot {
    /// Every slot, in the stable order used for sanitization and CSS output.
    pub const ALL: [Slot; 19] = [
        Slot::Background,
        Slot::Foreground,
        Slot::Card,
        Slot::CardForeground,
        Slot::Popover,
        Slot::PopoverForeground,
        Slot::Primary,
        Slot::PrimaryForeground,
        Slot::Secondary,
        Slot::SecondaryForeground,
        Slot::Muted,
        Slot::MutedForeground,
        Slot::Accent,
        Slot::AccentForeground,
        Slot::Destructive,
        Slot::DestructiveForeground,
        Slot::Border,
        Slot::Input,
        Slot::Ring,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        match self {
            Slot::Background => 0,
            Slot::Foreground => 1,
            Slot::Card => 2,
            Slot::CardForeground => 3,
            Slot::Popover => 4,
            Slot::PopoverForeground => 5,
            Slot::Primary => 6,
            Slot::PrimaryForeground => 7,
            Slot::Secondary => 8,
            Slot::SecondaryForeground => 9,
            Slot::Muted => 10,
            Slot::MutedForeground => 11,
            Slot::Accent => 12,
            Slot::AccentForeground => 13,
            Slot::Destructive => 14,
            Slot::DestructiveForeground => 15,
            Slot::Border => 16,
            Slot::Input => 17,
            Slot::Ring => 18,
        }
    }

    /// Slot name as it appears in theme definitions and diagnostics.
    pub const fn key(self) -> &'static str {
        match self {
            Slot::Background => "background",
            Slot::Foreground => "foreground",
            Slot::Card => "card",
            Slot::CardForeground => "cardForeground",
            Slot::Popover => "popover",
            Slot::PopoverForeground => "popoverForeground",
            Slot::Primary => "primary",
            Slot::PrimaryForeground => "primaryForeground",
            Slot::Secondary => "secondary",
            Slot::SecondaryForeground => "secondaryForeground",
            Slot::Muted => "muted",
            Slot::MutedForeground => "mutedForeground",
            Slot::Accent => "accent",
            Slot::AccentForeground => "accentForeground",
            Slot::Destructive => "destructive",
            Slot::DestructiveForeground => "destructiveForeground",
            Slot::Border => "border",
            Slot::Input => "input",
            Slot::Ring => "ring",
        }
    }

    /// CSS custom property emitted for this slot.
    pub const fn css_var(self) -> &'static str {
        match self {
            Slot::Background => "--background",
            Slot::Foreground => "--foreground",
            Slot::Card => "--card",
            Slot::CardForeground => "--card-foreground",
            Slot::Popover => "--popover",
            Slot::PopoverForeground => "--popover-foreground",
            Slot::Primary => "--primary",
            Slot::PrimaryForeground => "--primary-foreground",
            Slot::Secondary => "--secondary",
            Slot::SecondaryForeground => "--secondary-foreground",
            Slot::Muted => "--muted",
            Slot::MutedForeground => "--muted-foreground",
            Slot::Accent => "--accent",
            Slot::AccentForeground => "--accent-foreground",
            Slot::Destructive => "--destructive",
            Slot::DestructiveForeground => "--destructive-foreground",
            Slot::Border => "--border",
            Slot::Input => "--input",
            Slot::Ring => "--ring",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which half of a theme a palette fills. Used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteLabel {
    Light,
    Dark,
}

impl fmt::Display for PaletteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaletteLabel::Light => "light",
            PaletteLabel::Dark => "dark",
        })
    }
}

/// Unvalidated palette input: one candidate literal per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct PaletteSpec {
    pub background: String,
    pub foreground: String,
    pub card: String,
    pub card_foreground: String,
    pub popover: String,
    pub popover_foreground: String,
    pub primary: String,
    pub primary_foreground: String,
    pub secondary: String,
    pub secondary_foreground: String,
    pub muted: String,
    pub muted_foreground: String,
    pub accent: String,
    pub accent_foreground: String,
    pub destructive: String,
    pub destructive_foreground: String,
    pub border: String,
    pub input: String,
    pub ring: String,
}

impl PaletteSpec {
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Background => &self.background,
            Slot::Foreground => &self.foreground,
            Slot::Card => &self.card,
            Slot::CardForeground => &self.card_foreground,
            Slot::Popover => &self.popover,
            Slot::PopoverForeground => &self.popover_foreground,
            Slot::Primary => &self.primary,
            Slot::PrimaryForeground => &self.primary_foreground,
            Slot::Secondary => &self.secondary,
            Slot::SecondaryForeground => &self.secondary_foreground,
            Slot::Muted => &self.muted,
            Slot::MutedForeground => &self.muted_foreground,
            Slot::Accent => &self.accent,
            Slot::AccentForeground => &self.accent_foreground,
            Slot::Destructive => &self.destructive,
            Slot::DestructiveForeground => &self.destructive_foreground,
            Slot::Border => &self.border,
            Slot::Input => &self.input,
            Slot::Ring => &self.ring,
        }
    }
}

/// Partial palette used for best-effort overrides on top of a base palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteOverlay {
    values: [Option<String>; Slot::COUNT],
}

impl Default for PaletteOverlay {
    fn default() -> Self {
        Self {
            values: [const { None }; Slot::COUNT],
        }
    }
}

impl PaletteOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an override candidate. Validation happens at merge time, not here.
    pub fn set(&mut self, slot: Slot, value: impl Into<String>) -> &mut Self {
        self.values[slot.index()] = Some(value.into());
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values[slot.index()].as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Present overrides in slot order.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, &str)> {
        Slot::ALL
            .iter()
            .filter_map(|&slot| self.get(slot).map(|v| (slot, v)))
    }
}

impl<S: Into<String>> FromIterator<(Slot, S)> for PaletteOverlay {
    fn from_iter<T: IntoIterator<Item = (Slot, S)>>(iter: T) -> Self {
        let mut overlay = Self::new();
        for (slot, value) in iter {
            overlay.set(slot, value);
        }
        overlay
    }
}

/// A fully validated, immutable color palette.
///
/// Every slot holds a literal that passed [`color::parse`]. There are no
/// mutating accessors; derived palettes are produced by
/// [`Palette::merge_overlay`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    values: [Cow<'static, str>; Slot::COUNT],
}

impl Palette {
    /// Validate every slot of `spec` in [`Slot::ALL`] order. The first
    /// invalid slot aborts the whole construction; no partial palette is
    /// ever observable.
    pub fn sanitize(spec: &PaletteSpec, label: PaletteLabel) -> Result<Palette, ThemeError> {
        let mut values: [Cow<'static, str>; Slot::COUNT] =
            [const { Cow::Borrowed("") }; Slot::COUNT];
        for slot in Slot::ALL {
            let raw = spec.get(slot);
            match color::parse(raw) {
                Some(canonical) => values[slot.index()] = Cow::Owned(canonical.into_owned()),
                None => {
                    return Err(ThemeError::InvalidColor {
                        slot,
                        palette: label,
                        value: raw.to_string(),
                    });
                }
            }
        }
        Ok(Palette { values })
    }

    /// Build a palette from literals already known to be valid (the built-in
    /// preset tables). Validity of every table is enforced by tests; this
    /// constructor does not re-check.
    pub(crate) fn from_static(values: [&'static str; Slot::COUNT]) -> Palette {
        Palette {
            values: values.map(Cow::Borrowed),
        }
    }

    pub fn get(&self, slot: Slot) -> &str {
        &self.values[slot.index()]
    }

    /// Slot/value pairs in emission order.
    pub fn entries(&self) -> impl Iterator<Item = (Slot, &str)> {
        Slot::ALL.iter().map(|&slot| (slot, self.get(slot)))
    }

    /// Overlay `overrides` on this palette, returning a new palette.
    ///
    /// Best-effort by contract: an override that fails validation is dropped
    /// (with a warning) and the base value is kept. This never errors, unlike
    /// full construction which is all-or-nothing.
    #[must_use]
    pub fn merge_overlay(&self, overrides: &PaletteOverlay) -> Palette {
        let mut merged = self.clone();
        for (slot, candidate) in overrides.entries() {
            match color::parse(candidate) {
                Some(canonical) => {
                    merged.values[slot.index()] = Cow::Owned(canonical.into_owned());
                }
                None => {
                    warn!(slot = %slot, value = candidate, "dropping invalid overlay color");
                }
            }
        }
        merged
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Palette {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(Slot::COUNT))?;
        for (slot, value) in self.entries() {
            map.serialize_entry(slot.key(), value)?;
        }
        map.end()
    }
}
