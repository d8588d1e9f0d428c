//! Built-in, pre-validated theme presets.
//!
//! Pure data: seven named themes, each with a complete light and dark
//! palette and the default radius. Table order is palette slot order
//! (background … ring). Validity of every literal is enforced by tests;
//! construction goes through the unchecked static path.

use std::sync::OnceLock;

use crate::error::ThemeError;
use crate::palette::{Palette, Slot};
use crate::theme::ThemeConfig;

/// Built-in preset identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Neutral gray.
    Default,
    /// Classic blue.
    Blue,
    /// Pink/rose.
    Rose,
    /// Green.
    Emerald,
    /// Warm orange.
    Orange,
    /// Purple/violet.
    Violet,
    /// Slate gray.
    Slate,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::Default,
        Preset::Blue,
        Preset::Rose,
        Preset::Emerald,
        Preset::Orange,
        Preset::Violet,
        Preset::Slate,
    ];

    pub const fn index(self) -> usize {
        match self {
            Preset::Default => 0,
            Preset::Blue => 1,
            Preset::Rose => 2,
            Preset::Emerald => 3,
            Preset::Orange => 4,
            Preset::Violet => 5,
            Preset::Slate => 6,
        }
    }

    /// The preset's theme name (also its lookup key).
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Default => "default",
            Preset::Blue => "blue",
            Preset::Rose => "rose",
            Preset::Emerald => "emerald",
            Preset::Orange => "orange",
            Preset::Violet => "violet",
            Preset::Slate => "slate",
        }
    }

    /// Exact-name lookup. Unrecognized names are an error: preset names are
    /// chosen by the programmer, not the end user.
    pub fn from_name(name: &str) -> Result<Preset, ThemeError> {
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))
    }

    /// The preset's full theme configuration.
    pub fn theme(self) -> &'static ThemeConfig {
        &presets()[self.index()]
    }
}

/// All preset themes, in [`Preset::ALL`] order.
pub fn presets() -> &'static [ThemeConfig; 7] {
    static PRESETS: OnceLock<[ThemeConfig; 7]> = OnceLock::new();
    PRESETS.get_or_init(|| {
        Preset::ALL.map(|preset| {
            let (light, dark) = tables(preset);
            ThemeConfig::from_parts(
                preset.name(),
                Palette::from_static(light),
                Palette::from_static(dark),
            )
        })
    })
}

type SlotTable = [&'static str; Slot::COUNT];

const fn tables(preset: Preset) -> (SlotTable, SlotTable) {
    match preset {
        Preset::Default => (DEFAULT_LIGHT, DEFAULT_DARK),
        Preset::Blue => (BLUE_LIGHT, BLUE_DARK),
        Preset::Rose => (ROSE_LIGHT, ROSE_DARK),
        Preset::Emerald => (EMERALD_LIGHT, EMERALD_DARK),
        Preset::Orange => (ORANGE_LIGHT, ORANGE_DARK),
        Preset::Violet => (VIOLET_LIGHT, VIOLET_DARK),
        Preset::Slate => (SLATE_LIGHT, SLATE_DARK),
    }
}

const DEFAULT_LIGHT: SlotTable = [
    "#ffffff", "#0a0a0a", "#ffffff", "#0a0a0a", "#ffffff", "#0a0a0a",
    "#171717", "#fafafa", "#f5f5f5", "#171717", "#f5f5f5", "#737373",
    "#f5f5f5", "#171717", "#ef4444", "#fafafa", "#e5e5e5", "#e5e5e5",
    "#0a0a0a",
];

const DEFAULT_DARK: SlotTable = [
    "#0a0a0a", "#fafafa", "#0a0a0a", "#fafafa", "#0a0a0a", "#fafafa",
    "#fafafa", "#171717", "#262626", "#fafafa", "#262626", "#a3a3a3",
    "#262626", "#fafafa", "#7f1d1d", "#fafafa", "#262626", "#262626",
    "#d4d4d4",
];

const BLUE_LIGHT: SlotTable = [
    "#ffffff", "#0f172a", "#ffffff", "#0f172a", "#ffffff", "#0f172a",
    "#2563eb", "#ffffff", "#eff6ff", "#0f172a", "#eff6ff", "#64748b",
    "#eff6ff", "#0f172a", "#ef4444", "#ffffff", "#bfdbfe", "#bfdbfe",
    "#2563eb",
];

const BLUE_DARK: SlotTable = [
    "#0f172a", "#f8fafc", "#0f172a", "#f8fafc", "#0f172a", "#f8fafc",
    "#3b82f6", "#0f172a", "#1e293b", "#f8fafc", "#1e293b", "#93c5fd",
    "#1e293b", "#f8fafc", "#dc2626", "#ffffff", "#1e40af", "#1e40af",
    "#3b82f6",
];

const ROSE_LIGHT: SlotTable = [
    "#ffffff", "#1c1917", "#ffffff", "#1c1917", "#ffffff", "#1c1917",
    "#e11d48", "#ffffff", "#fef2f2", "#1c1917", "#fef2f2", "#78716c",
    "#fef2f2", "#1c1917", "#ef4444", "#ffffff", "#fecdd3", "#fecdd3",
    "#e11d48",
];

const ROSE_DARK: SlotTable = [
    "#1c1917", "#fafaf9", "#1c1917", "#fafaf9", "#1c1917", "#fafaf9",
    "#fb7185", "#1c1917", "#292524", "#fafaf9", "#292524", "#a8a29e",
    "#292524", "#fafaf9", "#dc2626", "#ffffff", "#44403c", "#44403c",
    "#fb7185",
];

const EMERALD_LIGHT: SlotTable = [
    "#ffffff", "#14532d", "#ffffff", "#14532d", "#ffffff", "#14532d",
    "#10b981", "#ffffff", "#ecfdf5", "#14532d", "#ecfdf5", "#6b7280",
    "#ecfdf5", "#14532d", "#ef4444", "#ffffff", "#a7f3d0", "#a7f3d0",
    "#10b981",
];

const EMERALD_DARK: SlotTable = [
    "#022c22", "#ecfdf5", "#022c22", "#ecfdf5", "#022c22", "#ecfdf5",
    "#34d399", "#022c22", "#064e3b", "#ecfdf5", "#064e3b", "#6ee7b7",
    "#064e3b", "#ecfdf5", "#dc2626", "#ffffff", "#047857", "#047857",
    "#34d399",
];

const ORANGE_LIGHT: SlotTable = [
    "#ffffff", "#1c1917", "#ffffff", "#1c1917", "#ffffff", "#1c1917",
    "#f97316", "#ffffff", "#fff7ed", "#1c1917", "#fff7ed", "#78716c",
    "#fff7ed", "#1c1917", "#ef4444", "#ffffff", "#fed7aa", "#fed7aa",
    "#f97316",
];

const ORANGE_DARK: SlotTable = [
    "#1c1917", "#fafaf9", "#1c1917", "#fafaf9", "#1c1917", "#fafaf9",
    "#fb923c", "#1c1917", "#292524", "#fafaf9", "#292524", "#a8a29e",
    "#292524", "#fafaf9", "#dc2626", "#ffffff", "#44403c", "#44403c",
    "#fb923c",
];

const VIOLET_LIGHT: SlotTable = [
    "#ffffff", "#1e1b4b", "#ffffff", "#1e1b4b", "#ffffff", "#1e1b4b",
    "#8b5cf6", "#ffffff", "#f5f3ff", "#1e1b4b", "#f5f3ff", "#6b7280",
    "#f5f3ff", "#1e1b4b", "#ef4444", "#ffffff", "#ddd6fe", "#ddd6fe",
    "#8b5cf6",
];

const VIOLET_DARK: SlotTable = [
    "#1e1b4b", "#f5f3ff", "#1e1b4b", "#f5f3ff", "#1e1b4b", "#f5f3ff",
    "#a78bfa", "#1e1b4b", "#312e81", "#f5f3ff", "#312e81", "#c4b5fd",
    "#312e81", "#f5f3ff", "#dc2626", "#ffffff", "#4c1d95", "#4c1d95",
    "#a78bfa",
];

const SLATE_LIGHT: SlotTable = [
    "#ffffff", "#0f172a", "#ffffff", "#0f172a", "#ffffff", "#0f172a",
    "#475569", "#ffffff", "#f1f5f9", "#0f172a", "#f1f5f9", "#64748b",
    "#f1f5f9", "#0f172a", "#ef4444", "#ffffff", "#e2e8f0", "#e2e8f0",
    "#475569",
];

const SLATE_DARK: SlotTable = [
    "#0f172a", "#f8fafc", "#0f172a", "#f8fafc", "#0f172a", "#f8fafc",
    "#94a3b8", "#0f172a", "#1e293b", "#f8fafc", "#1e293b", "#94a3b8",
    "#1e293b", "#f8fafc", "#dc2626", "#ffffff", "#334155", "#334155",
    "#94a3b8",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::palette::PaletteLabel;

    #[test]
    fn preset_all_indexes_are_consistent() {
        for (i, preset) in Preset::ALL.iter().enumerate() {
            assert_eq!(preset.index(), i);
        }
    }

    #[test]
    fn from_name_round_trips() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()).unwrap(), preset);
        }
    }

    #[test]
    fn from_name_unknown_errors() {
        let err = Preset::from_name("ocean").unwrap_err();
        assert_eq!(err, ThemeError::UnknownPreset("ocean".into()));
        // Lookup is exact, not case-folded.
        assert!(Preset::from_name("Default").is_err());
    }

    #[test]
    fn every_preset_palette_validates() {
        for preset in Preset::ALL {
            let theme = preset.theme();
            for (label, palette) in [
                (PaletteLabel::Light, theme.light()),
                (PaletteLabel::Dark, theme.dark()),
            ] {
                for (slot, value) in palette.entries() {
                    assert!(
                        color::parse(value).is_some(),
                        "{}/{label}/{slot}: {value}",
                        preset.name()
                    );
                }
            }
        }
    }

    #[test]
    fn every_preset_has_default_radius_and_matching_name() {
        for preset in Preset::ALL {
            let theme = preset.theme();
            assert_eq!(theme.radius(), "0.5rem");
            assert_eq!(theme.name(), preset.name());
        }
    }

    #[test]
    fn preset_themes_are_distinct() {
        let themes = presets();
        for a in 0..themes.len() {
            for b in (a + 1)..themes.len() {
                assert_ne!(themes[a], themes[b]);
            }
        }
    }

    #[test]
    fn theme_accessor_matches_table_order() {
        assert_eq!(Preset::Rose.theme().name(), "rose");
        assert_eq!(presets()[Preset::Rose.index()].name(), "rose");
    }
}
