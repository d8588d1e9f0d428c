#![no_main]

use shadekit_core::{escape_value, parse_color};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    // parse must never panic.
    let parsed = parse_color(text);

    if let Some(canonical) = parsed {
        // Accepted output must be idempotent under re-parsing.
        let again = parse_color(&canonical);
        assert_eq!(
            again.as_deref(),
            Some(canonical.as_ref()),
            "canonical output must re-parse to itself"
        );

        // Accepted output must be structurally inert in a CSS declaration.
        assert_eq!(
            escape_value(&canonical).as_ref(),
            canonical.as_ref(),
            "accepted literals must not need escaping"
        );
        assert!(!canonical.contains(['{', '}', ';', '<', '>']));
    }

    // escape_value must never panic and never emit structural characters.
    let escaped = escape_value(text);
    assert!(!escaped.contains(['{', '}', ';', '<', '>']));
});
