//! Deterministic CSS custom-property emission.
//!
//! Output format is fixed byte-for-byte: a `:root` block with one
//! declaration per slot plus `--radius`, and for dual-mode output a `.dark`
//! block with the dark slots (radius is not repeated). Values are run
//! through [`escape_value`] before interpolation; for literals that passed
//! validation this is the identity.

use std::borrow::Cow;

use crate::palette::{Palette, Slot};
use crate::theme::ThemeConfig;

/// Strip the characters that could terminate a declaration or open a block:
/// `;`, `<`, `>`, `{`, `}`.
///
/// Validated literals never contain these, so this only matters for callers
/// that construct palettes around validation; it must never alter a
/// well-formed value.
pub fn escape_value(value: &str) -> Cow<'_, str> {
    if value.contains([';', '<', '>', '{', '}']) {
        Cow::Owned(
            value
                .chars()
                .filter(|c| !matches!(c, ';' | '<' | '>' | '{' | '}'))
                .collect(),
        )
    } else {
        Cow::Borrowed(value)
    }
}

fn push_palette_vars(out: &mut String, palette: &Palette) {
    for (slot, value) in palette.entries() {
        out.push_str("  ");
        out.push_str(slot.css_var());
        out.push_str(": ");
        out.push_str(&escape_value(value));
        out.push_str(";\n");
    }
}

/// Render one palette (plus radius) as a `:root` block.
pub fn render_single_mode(palette: &Palette, radius: &str) -> String {
    let mut out = String::with_capacity(Slot::COUNT * 32);
    out.push_str(":root {\n");
    push_palette_vars(&mut out, palette);
    out.push_str("  --radius: ");
    out.push_str(&escape_value(radius));
    out.push_str(";\n}");
    out
}

/// Render a theme as a light `:root` block followed by a `.dark` override
/// block. Re-rendering the same theme yields byte-identical output.
pub fn render_dual_mode(theme: &ThemeConfig) -> String {
    let mut out = render_single_mode(theme.light(), theme.radius());
    out.push_str("\n\n.dark {\n");
    push_palette_vars(&mut out, theme.dark());
    out.push('}');
    out
}
