//! Closed-world color literal validation.
//!
//! A literal is accepted iff it matches one of four grammars exactly: a
//! recognized color keyword, `#` hex (3/6/8 digits), `rgb()`/`rgba()` with
//! canonical decimal channels, or `hsl()`/`hsla()` with percentage
//! saturation/lightness. Anything else is rejected; there is no "unknown
//! format passthrough". Validation never decomposes channels into a color
//! value — accepted literals flow through unchanged (keywords are
//! lower-cased, nothing else is touched).

use std::borrow::Cow;

use tracing::trace;

/// Recognized CSS color keywords, lower-cased and sorted for binary search.
///
/// This is a closed list: a keyword outside it is rejected even if some
/// browser would render it.
pub const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige",
    "bisque", "black", "blanchedalmond", "blue", "blueviolet", "brown",
    "burlywood", "cadetblue", "chartreuse", "chocolate", "coral",
    "cornflowerblue", "cornsilk", "crimson", "currentcolor", "cyan",
    "darkblue", "darkcyan", "darkgoldenrod", "darkgray", "darkgreen",
    "darkkhaki", "darkmagenta", "darkolivegreen", "darkorange",
    "darkorchid", "darkred", "darksalmon", "darkseagreen", "darkslateblue",
    "darkslategray", "darkturquoise", "darkviolet", "deeppink",
    "deepskyblue", "dimgray", "dodgerblue", "firebrick", "floralwhite",
    "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold",
    "goldenrod", "gray", "green", "greenyellow", "grey", "honeydew",
    "hotpink", "indianred", "indigo", "inherit", "ivory", "khaki",
    "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray",
    "lightgreen", "lightpink", "lightsalmon", "lightseagreen",
    "lightskyblue", "lightslategray", "lightsteelblue", "lightyellow",
    "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine",
    "mediumblue", "mediumorchid", "mediumpurple", "mediumseagreen",
    "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin",
    "navajowhite", "navy", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise",
    "palevioletred", "papayawhip", "peachpuff", "peru", "pink", "plum",
    "powderblue", "purple", "red", "rosybrown", "royalblue", "saddlebrown",
    "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "snow", "springgreen", "steelblue",
    "tan", "teal", "thistle", "tomato", "transparent", "turquoise",
    "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Validate a color literal.
///
/// Returns the canonical literal on success: keywords come back lower-cased,
/// every other accepted form is the trimmed input unchanged. Returns `None`
/// for anything outside the whitelist, including the empty string. Total and
/// panic-free for arbitrary input.
///
/// ```
/// use shadekit_core::color::parse;
///
/// assert_eq!(parse("  RebeccaPurple  "), None); // not in the closed list
/// assert_eq!(parse("Tomato").as_deref(), Some("tomato"));
/// assert_eq!(parse("#1a2B3c").as_deref(), Some("#1a2B3c"));
/// assert_eq!(parse("rgb(01,0,0)"), None); // non-canonical channel
/// ```
pub fn parse(value: &str) -> Option<Cow<'_, str>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.chars().any(|c| c.is_ascii_uppercase()) {
        let lower = trimmed.to_ascii_lowercase();
        if NAMED_COLORS.binary_search(&lower.as_str()).is_ok() {
            return Some(Cow::Owned(lower));
        }
    } else if NAMED_COLORS.binary_search(&trimmed).is_ok() {
        return Some(Cow::Borrowed(trimmed));
    }

    if is_hex(trimmed) || is_rgb(trimmed) || is_hsl(trimmed) {
        return Some(Cow::Borrowed(trimmed));
    }

    trace!(literal = trimmed, "rejected color literal");
    None
}

/// Pre-flight check over arbitrary key/value pairs: true iff every value
/// parses. The keys are only used for trace logging.
pub fn validate_all<'a, I>(entries: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut ok = true;
    for (key, value) in entries {
        if parse(value).is_none() {
            trace!(key, value, "validate_all: invalid color");
            ok = false;
        }
    }
    ok
}

/// `#` followed by exactly 3, 6, or 8 hex digits.
fn is_hex(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Strip a case-insensitive `name(` prefix and `)` suffix, yielding the body.
fn func_body<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let inner = s.strip_suffix(')')?;
    let (head, body) = inner.split_at_checked(name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    body.strip_prefix('(')
}

/// Channel in 0..=255 in canonical decimal form: re-serializing the parsed
/// integer must reproduce the trimmed field (rejects `01`, `+1`, `1.0`).
fn is_canonical_channel(field: &str) -> bool {
    let t = field.trim();
    match t.parse::<u16>() {
        Ok(n) => n <= 255 && n.to_string() == t,
        Err(_) => false,
    }
}

/// Alpha component: finite float in [0, 1].
fn is_alpha(field: &str) -> bool {
    field
        .trim()
        .parse::<f64>()
        .is_ok_and(|a| a.is_finite() && (0.0..=1.0).contains(&a))
}

/// Percentage: finite float in [0, 100] immediately followed by `%`.
fn is_percentage(field: &str) -> bool {
    let Some(num) = field.trim().strip_suffix('%') else {
        return false;
    };
    num.parse::<f64>()
        .is_ok_and(|p| p.is_finite() && (0.0..=100.0).contains(&p))
}

fn is_rgb(s: &str) -> bool {
    let (body, has_alpha) = match func_body(s, "rgba") {
        Some(body) => (body, true),
        None => match func_body(s, "rgb") {
            Some(body) => (body, false),
            None => return false,
        },
    };
    let mut fields = body.split(',');
    let (Some(r), Some(g), Some(b)) = (fields.next(), fields.next(), fields.next()) else {
        return false;
    };
    if !is_canonical_channel(r) || !is_canonical_channel(g) || !is_canonical_channel(b) {
        return false;
    }
    match (has_alpha, fields.next(), fields.next()) {
        (true, Some(a), None) => is_alpha(a),
        (false, None, _) => true,
        _ => false,
    }
}

fn is_hsl(s: &str) -> bool {
    let (body, has_alpha) = match func_body(s, "hsla") {
        Some(body) => (body, true),
        None => match func_body(s, "hsl") {
            Some(body) => (body, false),
            None => return false,
        },
    };
    let mut fields = body.split(',');
    let (Some(h), Some(sat), Some(l)) = (fields.next(), fields.next(), fields.next()) else {
        return false;
    };
    // Hue wraps; any finite number is accepted, no range check.
    if !h.trim().parse::<f64>().is_ok_and(f64::is_finite) {
        return false;
    }
    if !is_percentage(sat) || !is_percentage(l) {
        return false;
    }
    match (has_alpha, fields.next(), fields.next()) {
        (true, Some(a), None) => is_alpha(a),
        (false, None, _) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors_sorted_for_binary_search() {
        let mut sorted = NAMED_COLORS.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, NAMED_COLORS);
    }

    // ── Named keywords ──────────────────────────────────────────────

    #[test]
    fn every_named_color_parses_case_insensitively() {
        for name in NAMED_COLORS {
            assert_eq!(parse(name).as_deref(), Some(*name));
            let upper = name.to_ascii_uppercase();
            assert_eq!(parse(&upper).as_deref(), Some(*name), "upper {upper}");
        }
    }

    #[test]
    fn named_color_canonical_output_is_lowercase() {
        assert_eq!(parse("CurrentColor").as_deref(), Some("currentcolor"));
        assert_eq!(parse("  Transparent ").as_deref(), Some("transparent"));
        assert_eq!(parse("INHERIT").as_deref(), Some("inherit"));
    }

    #[test]
    fn unknown_keyword_rejected() {
        assert_eq!(parse("rebeccapurple"), None);
        assert_eq!(parse("blurple"), None);
    }

    // ── Hex ─────────────────────────────────────────────────────────

    #[test]
    fn hex_lengths_3_6_8_accepted() {
        assert_eq!(parse("#abc").as_deref(), Some("#abc"));
        assert_eq!(parse("#A1b2C3").as_deref(), Some("#A1b2C3"));
        assert_eq!(parse("#00ff00cc").as_deref(), Some("#00ff00cc"));
    }

    #[test]
    fn hex_other_lengths_rejected() {
        for bad in ["#", "#a", "#ab", "#abcd", "#abcde", "#abcdef0", "#abcdef012"] {
            assert_eq!(parse(bad), None, "{bad}");
        }
    }

    #[test]
    fn hex_non_digit_rejected() {
        assert_eq!(parse("#ggg"), None);
        assert_eq!(parse("#12345g"), None);
        assert_eq!(parse("#12 456"), None);
    }

    // ── rgb / rgba ──────────────────────────────────────────────────

    #[test]
    fn rgb_basic() {
        assert_eq!(parse("rgb(255,0,0)").as_deref(), Some("rgb(255,0,0)"));
        assert_eq!(parse("RGB(0, 128, 255)").as_deref(), Some("RGB(0, 128, 255)"));
        assert_eq!(parse("rgb( 1 , 2 , 3 )").as_deref(), Some("rgb( 1 , 2 , 3 )"));
    }

    #[test]
    fn rgb_out_of_range_rejected() {
        assert_eq!(parse("rgb(256,0,0)"), None);
        assert_eq!(parse("rgb(-1,0,0)"), None);
        assert_eq!(parse("rgb(999,0,0)"), None);
    }

    #[test]
    fn rgb_non_canonical_channel_rejected() {
        assert_eq!(parse("rgb(01,0,0)"), None);
        assert_eq!(parse("rgb(+1,0,0)"), None);
        assert_eq!(parse("rgb(1.0,0,0)"), None);
        assert_eq!(parse("rgb(00,0,0)"), None);
    }

    #[test]
    fn rgb_field_count_strict() {
        assert_eq!(parse("rgb(0,0)"), None);
        assert_eq!(parse("rgb(0,0,0,1)"), None);
        assert_eq!(parse("rgba(0,0,0)"), None);
        assert_eq!(parse("rgba(0,0,0,1,2)"), None);
    }

    #[test]
    fn rgba_alpha_range() {
        assert_eq!(parse("rgba(0,0,0,0)").as_deref(), Some("rgba(0,0,0,0)"));
        assert_eq!(parse("rgba(0,0,0,1)").as_deref(), Some("rgba(0,0,0,1)"));
        assert_eq!(parse("rgba(0,0,0,0.5)").as_deref(), Some("rgba(0,0,0,0.5)"));
        assert_eq!(parse("rgba(0,0,0,1.5)"), None);
        assert_eq!(parse("rgba(0,0,0,-0.1)"), None);
        assert_eq!(parse("rgba(0,0,0,nan)"), None);
        assert_eq!(parse("rgba(0,0,0,inf)"), None);
    }

    #[test]
    fn rgb_missing_paren_rejected() {
        assert_eq!(parse("rgb(0,0,0"), None);
        assert_eq!(parse("rgb 0,0,0)"), None);
    }

    // ── hsl / hsla ──────────────────────────────────────────────────

    #[test]
    fn hsl_basic() {
        assert_eq!(parse("hsl(200,50%,50%)").as_deref(), Some("hsl(200,50%,50%)"));
        assert_eq!(parse("HSL(0, 0%, 0%)").as_deref(), Some("HSL(0, 0%, 0%)"));
        assert_eq!(parse("hsla(0,0%,0%,0)").as_deref(), Some("hsla(0,0%,0%,0)"));
    }

    #[test]
    fn hsl_hue_unbounded() {
        assert_eq!(parse("hsl(-120,50%,50%)").as_deref(), Some("hsl(-120,50%,50%)"));
        assert_eq!(parse("hsl(7200.5,50%,50%)").as_deref(), Some("hsl(7200.5,50%,50%)"));
        assert_eq!(parse("hsl(nan,50%,50%)"), None);
    }

    #[test]
    fn hsl_missing_percent_rejected() {
        assert_eq!(parse("hsl(200,50,50%)"), None);
        assert_eq!(parse("hsl(200,50%,50)"), None);
    }

    #[test]
    fn hsl_percentage_range() {
        assert_eq!(parse("hsl(0,101%,50%)"), None);
        assert_eq!(parse("hsl(0,50%,-1%)"), None);
        assert_eq!(parse("hsl(0,100%,100%)").as_deref(), Some("hsl(0,100%,100%)"));
    }

    #[test]
    fn hsl_field_count_strict() {
        assert_eq!(parse("hsl(0,0%)"), None);
        assert_eq!(parse("hsl(0,0%,0%,1)"), None);
        assert_eq!(parse("hsla(0,0%,0%)"), None);
    }

    // ── Rejected junk ───────────────────────────────────────────────

    #[test]
    fn executable_and_url_content_rejected() {
        assert_eq!(parse("javascript:alert(1)"), None);
        assert_eq!(parse("url(x.png)"), None);
        assert_eq!(parse("expression(alert(1))"), None);
        assert_eq!(parse("var(--primary)"), None);
    }

    #[test]
    fn empty_and_whitespace_rejected() {
        assert_eq!(parse(""), None);
        assert_eq!(parse(" "), None);
        assert_eq!(parse("\t\n"), None);
    }

    #[test]
    fn passthrough_borrows_when_possible() {
        assert!(matches!(parse("#fff"), Some(Cow::Borrowed(_))));
        assert!(matches!(parse("tomato"), Some(Cow::Borrowed(_))));
        assert!(matches!(parse("Tomato"), Some(Cow::Owned(_))));
    }

    // ── validate_all ────────────────────────────────────────────────

    #[test]
    fn validate_all_true_only_when_every_value_parses() {
        assert!(validate_all([("a", "#fff"), ("b", "rgb(0,0,0)")]));
        assert!(!validate_all([("a", "#fff"), ("b", "not-a-color")]));
        assert!(validate_all(std::iter::empty::<(&str, &str)>()));
    }
}
