#![forbid(unsafe_code)]

//! Core theming vocabulary for shadekit.
//!
//! # Role in shadekit
//! `shadekit-core` is the pure, deterministic half of the toolkit: it decides
//! which color literals are acceptable, assembles immutable theme records,
//! and renders them to CSS custom-property text. It performs no I/O and
//! touches no document; `shadekit-runtime` drives it from host state and
//! `shadekit-web` binds it to a real browser.
//!
//! # This crate provides
//! - [`color`]: closed-world color literal validation (named/hex/rgb/hsl).
//! - [`palette`]: the 19 fixed semantic slots, all-or-nothing palette
//!   sanitization, and best-effort overlays.
//! - [`theme`]: [`ThemeConfig`] records, modes, and a fluent builder.
//! - [`css`]: deterministic `:root`/`.dark` custom-property emission.
//! - [`presets`]: seven built-in, pre-validated themes.
//! - [`storage`]: sanitized persistence-key derivation.
//!
//! Validation failures are configuration-time errors ([`ThemeError`]) and
//! surface immediately; nothing in this crate degrades silently except the
//! explicitly best-effort overlay merge.

/// Color literal validation.
pub mod color;
/// Deterministic CSS custom-property emission.
pub mod css;
/// Theme construction and preset lookup errors.
pub mod error;
/// Palette slots, sanitization, and overlays.
pub mod palette;
/// Built-in preset themes.
pub mod presets;
/// Persistence key helpers.
pub mod storage;
/// Theme configuration and modes.
pub mod theme;

pub use color::{parse as parse_color, validate_all};
pub use css::{escape_value, render_dual_mode, render_single_mode};
pub use error::ThemeError;
pub use palette::{Palette, PaletteLabel, PaletteOverlay, PaletteSpec, Slot};
pub use presets::{Preset, presets};
pub use storage::{mode_key, sanitize_key, theme_key};
pub use theme::{DEFAULT_RADIUS, Mode, ResolvedMode, ThemeBuilder, ThemeConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_theme_renders_end_to_end() {
        let theme = Preset::Emerald.theme();
        let css = render_dual_mode(theme);
        assert!(css.contains("--primary: #10b981;"));
        assert!(css.contains("--radius: 0.5rem;"));
        assert!(css.contains(".dark {"));
    }

    #[test]
    fn built_theme_round_trips_through_render() {
        let theme = ThemeBuilder::from_preset("acme", Preset::Slate)
            .radius("0.75rem")
            .build()
            .unwrap();
        let css = render_single_mode(theme.light(), theme.radius());
        assert!(css.contains("--radius: 0.75rem;"));
        assert!(css.contains("--primary: #475569;"));
    }

    #[test]
    fn overlay_then_render_reflects_override() {
        let overlay: PaletteOverlay = [(Slot::Primary, "#abcdef")].into_iter().collect();
        let light = Preset::Default.theme().light().merge_overlay(&overlay);
        let css = render_single_mode(&light, DEFAULT_RADIUS);
        assert!(css.contains("--primary: #abcdef;"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn theme_config_deserialization_validates() {
        let good = serde_json::json!({
            "name": "wire",
            "light": palette_json("#111111"),
            "dark": palette_json("#eeeeee"),
        });
        let theme: ThemeConfig = serde_json::from_value(good).unwrap();
        assert_eq!(theme.radius(), DEFAULT_RADIUS);

        let bad = serde_json::json!({
            "name": "wire",
            "light": palette_json("javascript:alert(1)"),
            "dark": palette_json("#eeeeee"),
        });
        let err = serde_json::from_value::<ThemeConfig>(bad).unwrap_err();
        assert!(err.to_string().contains("invalid color"), "{err}");
    }

    #[cfg(feature = "serde")]
    fn palette_json(primary: &str) -> serde_json::Value {
        serde_json::json!({
            "background": "#ffffff",
            "foreground": "#0a0a0a",
            "card": "#ffffff",
            "cardForeground": "#0a0a0a",
            "popover": "#ffffff",
            "popoverForeground": "#0a0a0a",
            "primary": primary,
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
        })
    }
}
