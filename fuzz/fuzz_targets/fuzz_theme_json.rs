#![no_main]

use shadekit_core::{ThemeConfig, parse_color, render_dual_mode, Slot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 16384 {
        return;
    }

    // Deserialization must never panic, and anything it accepts must be
    // a fully validated theme.
    let Ok(theme) = serde_json::from_str::<ThemeConfig>(text) else {
        return;
    };

    for slot in Slot::ALL {
        let light = theme.light().get(slot);
        let dark = theme.dark().get(slot);
        assert!(parse_color(light).is_some(), "unvalidated light {slot}: {light}");
        assert!(parse_color(dark).is_some(), "unvalidated dark {slot}: {dark}");
    }

    // Rendering a validated theme must never panic and must keep shape.
    let css = render_dual_mode(&theme);
    assert!(css.starts_with(":root {\n"));
    assert!(css.contains(".dark {"));
});
