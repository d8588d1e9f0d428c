//! Property-based invariant tests for color validation and CSS emission.
//!
//! Invariants checked:
//!
//! 1. No panic on arbitrary input — `parse` is total
//! 2. Determinism — same input always yields identical output
//! 3. Canonical output is idempotent — re-parsing an accepted literal
//!    accepts it and returns it unchanged
//! 4. Accepted literals never contain CSS-structural characters, so
//!    `escape_value` is the identity on them
//! 5. Hex grammar — exactly 3/6/8 hex digits accepted, everything else
//!    rejected
//! 6. rgb channel canonicality — generated canonical triples accepted,
//!    zero-padded ones rejected
//! 7. Overlay merge never errors and only ever substitutes validated
//!    values

use proptest::prelude::*;
use shadekit_core::{PaletteOverlay, Preset, Slot, escape_value, parse_color};

proptest! {
    #[test]
    fn parse_never_panics(input in ".{0,64}") {
        let _ = parse_color(&input);
    }

    #[test]
    fn parse_is_deterministic(input in ".{0,64}") {
        prop_assert_eq!(parse_color(&input), parse_color(&input));
    }

    #[test]
    fn canonical_output_is_idempotent(input in ".{0,64}") {
        if let Some(canonical) = parse_color(&input) {
            let again = parse_color(&canonical);
            prop_assert_eq!(again.as_deref(), Some(canonical.as_ref()));
        }
    }

    #[test]
    fn accepted_literals_survive_escaping(input in ".{0,64}") {
        if let Some(canonical) = parse_color(&input) {
            let escaped = escape_value(&canonical);
            prop_assert_eq!(escaped.as_ref(), canonical.as_ref());
        }
    }

    #[test]
    fn hex_of_valid_lengths_accepted(digits in proptest::collection::vec("[0-9a-fA-F]", 1..12)) {
        let literal = format!("#{}", digits.concat());
        let expected = matches!(digits.len(), 3 | 6 | 8);
        prop_assert_eq!(parse_color(&literal).is_some(), expected, "{}", literal);
    }

    #[test]
    fn canonical_rgb_triples_accepted(r in 0u16..=255, g in 0u16..=255, b in 0u16..=255) {
        let literal = format!("rgb({r},{g},{b})");
        prop_assert!(parse_color(&literal).is_some(), "{}", literal);

        let padded = format!("rgb({r:04},{g},{b})");
        prop_assert!(parse_color(&padded).is_none(), "{}", padded);
    }

    #[test]
    fn rgb_out_of_range_rejected(r in 256u32..10_000) {
        let literal = format!("rgb({r},0,0)");
        prop_assert!(parse_color(&literal).is_none(), "{}", literal);
    }

    #[test]
    fn overlay_merge_total_and_validating(value in ".{0,32}") {
        let base = Preset::Default.theme().light();
        let overlay: PaletteOverlay = [(Slot::Primary, value.as_str())].into_iter().collect();
        let merged = base.merge_overlay(&overlay);
        match parse_color(&value) {
            Some(canonical) => prop_assert_eq!(merged.get(Slot::Primary), canonical.as_ref()),
            None => prop_assert_eq!(merged.get(Slot::Primary), base.get(Slot::Primary)),
        }
    }
}
