//! Provider options as received from JavaScript.
//!
//! Options cross the boundary as JSON, so this module is plain serde and
//! compiles on every target; only the conversion's callers are wasm-gated.
//! Themes may be named presets or inline theme objects, and inline objects
//! go through the same validation as any other deserialized [`ThemeConfig`].

use serde::Deserialize;
use shadekit_core::{Mode, Preset, ThemeConfig, ThemeError};
use shadekit_runtime::ControllerConfig;

/// A theme reference in provider options: a preset name or a full theme.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ThemeSource {
    /// Name of a built-in preset, e.g. `"emerald"`.
    Preset(String),
    /// Inline theme object, validated during deserialization.
    Inline(ThemeConfig),
}

impl ThemeSource {
    fn resolve(self) -> Result<ThemeConfig, ThemeError> {
        match self {
            ThemeSource::Preset(name) => {
                Ok(Preset::from_name(&name)?.theme().clone())
            }
            ThemeSource::Inline(theme) => Ok(theme),
        }
    }
}

/// Options accepted by the theme provider constructor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProviderOptions {
    /// Single theme shorthand; ignored when `themes` is non-empty.
    pub theme: Option<ThemeSource>,
    /// Full theme list.
    pub themes: Vec<ThemeSource>,
    /// Theme to activate when nothing is persisted.
    pub default_theme: Option<String>,
    /// Mode intent when nothing is persisted.
    pub default_mode: Mode,
    /// Fixed persistence base key.
    pub storage_key: Option<String>,
}

impl ProviderOptions {
    /// Resolve preset names and assemble the controller configuration.
    ///
    /// Fails with [`ThemeError::UnknownPreset`] for an unrecognized preset
    /// name; inline themes were already validated when deserialized.
    pub fn into_config(self) -> Result<ControllerConfig, ThemeError> {
        let theme = self.theme.map(ThemeSource::resolve).transpose()?;
        let themes = self
            .themes
            .into_iter()
            .map(ThemeSource::resolve)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ControllerConfig {
            theme,
            themes,
            default_theme: self.default_theme,
            default_mode: self.default_mode,
            storage_key: self.storage_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shadekit_core::Slot;

    use super::*;

    #[test]
    fn empty_options_yield_empty_config() {
        let options: ProviderOptions = serde_json::from_str("{}").unwrap();
        let config = options.into_config().unwrap();
        assert!(config.theme.is_none());
        assert!(config.themes.is_empty());
        assert_eq!(config.default_mode, Mode::System);
        assert_eq!(config.storage_key, None);
    }

    #[test]
    fn preset_names_resolve() {
        let options: ProviderOptions =
            serde_json::from_str(r#"{"themes": ["default", "emerald"], "defaultMode": "dark"}"#)
                .unwrap();
        let config = options.into_config().unwrap();
        assert_eq!(config.themes.len(), 2);
        assert_eq!(config.themes[1].name(), "emerald");
        assert_eq!(config.default_mode, Mode::Dark);
    }

    #[test]
    fn unknown_preset_name_is_an_error() {
        let options: ProviderOptions =
            serde_json::from_str(r#"{"theme": "tangerine"}"#).unwrap();
        let err = options.into_config().unwrap_err();
        assert!(matches!(err, ThemeError::UnknownPreset(name) if name == "tangerine"));
    }

    #[test]
    fn preset_names_are_not_case_folded() {
        let options: ProviderOptions = serde_json::from_str(r#"{"theme": "Emerald"}"#).unwrap();
        assert!(options.into_config().is_err());
    }

    #[test]
    fn inline_theme_deserializes_validated() {
        let json = format!(
            r#"{{"theme": {{"name": "acme", "light": {}, "dark": {}, "radius": "1rem"}}}}"#,
            palette_json("#2563eb"),
            palette_json("#3b82f6"),
        );
        let options: ProviderOptions = serde_json::from_str(&json).unwrap();
        let config = options.into_config().unwrap();
        let theme = config.theme.unwrap();
        assert_eq!(theme.name(), "acme");
        assert_eq!(theme.radius(), "1rem");
        assert_eq!(theme.light().get(Slot::Primary), "#2563eb");
    }

    #[test]
    fn inline_theme_with_bad_color_fails_deserialization() {
        let json = format!(
            r#"{{"theme": {{"name": "acme", "light": {}, "dark": {}}}}}"#,
            palette_json("url(javascript:alert(1))"),
            palette_json("#3b82f6"),
        );
        assert!(serde_json::from_str::<ProviderOptions>(&json).is_err());
    }

    #[test]
    fn unknown_option_fields_rejected() {
        assert!(serde_json::from_str::<ProviderOptions>(r#"{"them": "emerald"}"#).is_err());
    }

    fn palette_json(primary: &str) -> String {
        format!(
            r##"{{
                "background": "#ffffff",
                "foreground": "#0a0a0a",
                "card": "#ffffff",
                "cardForeground": "#0a0a0a",
                "popover": "#ffffff",
                "popoverForeground": "#0a0a0a",
                "primary": "{primary}",
                "primaryForeground": "#fafafa",
                "secondary": "#f5f5f5",
                "secondaryForeground": "#171717",
                "muted": "#f5f5f5",
                "mutedForeground": "#737373",
                "accent": "#f5f5f5",
                "accentForeground": "#171717",
                "destructive": "#ef4444",
                "destructiveForeground": "#fafafa",
                "border": "#e5e5e5",
                "input": "#e5e5e5",
                "ring": "#0a0a0a"
            }}"##
        )
    }
}
