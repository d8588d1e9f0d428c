//! Theme configuration: mode enums and the immutable [`ThemeConfig`] record.
//!
//! A theme pairs a validated light and dark palette under a name that is
//! safe to embed in persistence keys. Construction validates everything up
//! front; afterwards the record never changes.

use std::fmt;

use crate::error::ThemeError;
use crate::palette::{Palette, PaletteLabel, PaletteOverlay, PaletteSpec};
use crate::presets::Preset;

/// Default border radius applied when a theme does not specify one.
pub const DEFAULT_RADIUS: &str = "0.5rem";

/// The user's mode intent, including "follow the OS preference".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    Light,
    Dark,
    #[default]
    System,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::System => "system",
        }
    }

    /// Exact-match parse of a persisted mode string.
    pub fn parse(s: &str) -> Option<Mode> {
        match s {
            "light" => Some(Mode::Light),
            "dark" => Some(Mode::Dark),
            "system" => Some(Mode::System),
            _ => None,
        }
    }

    /// Resolve this intent against the OS preference supplied by the caller.
    pub fn resolve_with(self, system: ResolvedMode) -> ResolvedMode {
        match self {
            Mode::Light => ResolvedMode::Light,
            Mode::Dark => ResolvedMode::Dark,
            Mode::System => system,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mode actually applied after resolving [`Mode::System`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResolvedMode {
    Light,
    Dark,
}

impl ResolvedMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ResolvedMode::Light => "light",
            ResolvedMode::Dark => "dark",
        }
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, ResolvedMode::Dark)
    }

    #[must_use]
    pub const fn opposite(self) -> ResolvedMode {
        match self {
            ResolvedMode::Light => ResolvedMode::Dark,
            ResolvedMode::Dark => ResolvedMode::Light,
        }
    }
}

impl fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResolvedMode> for Mode {
    fn from(resolved: ResolvedMode) -> Mode {
        match resolved {
            ResolvedMode::Light => Mode::Light,
            ResolvedMode::Dark => Mode::Dark,
        }
    }
}

/// An immutable, fully validated theme.
///
/// The name is restricted to `[A-Za-z0-9_-]+` because it is used verbatim as
/// a persistence-key component. Both palettes passed sanitization. "Updates"
/// mean building a new theme.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawThemeConfig"))]
pub struct ThemeConfig {
    name: String,
    light: Palette,
    dark: Palette,
    radius: String,
}

impl ThemeConfig {
    /// Build a theme from explicit palettes.
    ///
    /// Fails with [`ThemeError::InvalidName`] for an unusable name and
    /// propagates [`ThemeError::InvalidColor`] from palette sanitization.
    /// `radius` defaults to [`DEFAULT_RADIUS`].
    pub fn build(
        name: &str,
        light: &PaletteSpec,
        dark: &PaletteSpec,
        radius: Option<&str>,
    ) -> Result<ThemeConfig, ThemeError> {
        let name = validate_name(name)?;
        let light = Palette::sanitize(light, PaletteLabel::Light)?;
        let dark = Palette::sanitize(dark, PaletteLabel::Dark)?;
        Ok(ThemeConfig {
            name: name.to_string(),
            light,
            dark,
            radius: radius.unwrap_or(DEFAULT_RADIUS).to_string(),
        })
    }

    /// Fluent construction, starting from the `default` preset's palettes.
    pub fn builder(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn light(&self) -> &Palette {
        &self.light
    }

    pub fn dark(&self) -> &Palette {
        &self.dark
    }

    pub fn radius(&self) -> &str {
        &self.radius
    }

    /// Palette for a resolved mode.
    pub fn palette_for(&self, mode: ResolvedMode) -> &Palette {
        match mode {
            ResolvedMode::Light => &self.light,
            ResolvedMode::Dark => &self.dark,
        }
    }

    /// Internal constructor for the pre-validated preset tables.
    pub(crate) fn from_parts(name: &'static str, light: Palette, dark: Palette) -> ThemeConfig {
        ThemeConfig {
            name: name.to_string(),
            light,
            dark,
            radius: DEFAULT_RADIUS.to_string(),
        }
    }
}

fn validate_name(name: &str) -> Result<&str, ThemeError> {
    let trimmed = name.trim();
    let ok = !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(trimmed)
    } else {
        Err(ThemeError::InvalidName(name.to_string()))
    }
}

/// Builder for [`ThemeConfig`].
///
/// Palettes come from one of three sources, in precedence order: an explicit
/// [`PaletteSpec`] (all-or-nothing validation), the palettes of a base
/// [`Preset`], or the `default` preset. Overlays are applied best-effort on
/// top of whichever source wins.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    name: String,
    base: Preset,
    light: Option<PaletteSpec>,
    dark: Option<PaletteSpec>,
    light_overlay: PaletteOverlay,
    dark_overlay: PaletteOverlay,
    radius: Option<String>,
}

impl ThemeBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>) -> ThemeBuilder {
        ThemeBuilder {
            name: name.into(),
            base: Preset::Default,
            light: None,
            dark: None,
            light_overlay: PaletteOverlay::new(),
            dark_overlay: PaletteOverlay::new(),
            radius: None,
        }
    }

    /// Start from a preset's palettes instead of the `default` preset.
    #[must_use]
    pub fn from_preset(name: impl Into<String>, base: Preset) -> ThemeBuilder {
        let mut builder = ThemeBuilder::new(name);
        builder.base = base;
        builder
    }

    /// Explicit light palette; validated all-or-nothing at `build`.
    #[must_use]
    pub fn light(mut self, spec: PaletteSpec) -> Self {
        self.light = Some(spec);
        self
    }

    /// Explicit dark palette; validated all-or-nothing at `build`.
    #[must_use]
    pub fn dark(mut self, spec: PaletteSpec) -> Self {
        self.dark = Some(spec);
        self
    }

    /// Best-effort overrides on the light palette.
    #[must_use]
    pub fn light_overlay(mut self, overlay: PaletteOverlay) -> Self {
        self.light_overlay = overlay;
        self
    }

    /// Best-effort overrides on the dark palette.
    #[must_use]
    pub fn dark_overlay(mut self, overlay: PaletteOverlay) -> Self {
        self.dark_overlay = overlay;
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: impl Into<String>) -> Self {
        self.radius = Some(radius.into());
        self
    }

    pub fn build(self) -> Result<ThemeConfig, ThemeError> {
        let name = validate_name(&self.name)?.to_string();
        let base = self.base.theme();
        let light = match &self.light {
            Some(spec) => Palette::sanitize(spec, PaletteLabel::Light)?,
            None => base.light().clone(),
        };
        let dark = match &self.dark {
            Some(spec) => Palette::sanitize(spec, PaletteLabel::Dark)?,
            None => base.dark().clone(),
        };
        Ok(ThemeConfig {
            name,
            light: light.merge_overlay(&self.light_overlay),
            dark: dark.merge_overlay(&self.dark_overlay),
            radius: self.radius.unwrap_or_else(|| DEFAULT_RADIUS.to_string()),
        })
    }
}

/// Wire shape for deserialization; funneled through [`ThemeConfig::build`]
/// so deserialized themes cannot bypass validation.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawThemeConfig {
    name: String,
    light: PaletteSpec,
    dark: PaletteSpec,
    #[serde(default)]
    radius: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawThemeConfig> for ThemeConfig {
    type Error = ThemeError;

    fn try_from(raw: RawThemeConfig) -> Result<Self, Self::Error> {
        ThemeConfig::build(&raw.name, &raw.light, &raw.dark, raw.radius.as_deref())
    }
}
