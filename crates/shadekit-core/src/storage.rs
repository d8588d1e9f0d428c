//! Persistence key derivation.
//!
//! Pure string helpers shared by every storage backend: a caller-supplied
//! base key is sanitized to `[A-Za-z0-9_-]` and suffixed with `-mode` or
//! `-theme`. Sanitization means a base key with stray characters behaves
//! identically to its cleaned form.

/// Suffix for the persisted mode entry.
pub const MODE_SUFFIX: &str = "-mode";
/// Suffix for the persisted theme-name entry.
pub const THEME_SUFFIX: &str = "-theme";

/// Strip every character outside `[A-Za-z0-9_-]`.
pub fn sanitize_key(base: &str) -> String {
    base.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Storage key holding the persisted mode for `base`.
pub fn mode_key(base: &str) -> String {
    let mut key = sanitize_key(base);
    key.push_str(MODE_SUFFIX);
    key
}

/// Storage key holding the persisted theme name for `base`.
pub fn theme_key(base: &str) -> String {
    let mut key = sanitize_key(base);
    key.push_str(THEME_SUFFIX);
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_disallowed_characters() {
        assert_eq!(sanitize_key("a b/c"), "abc");
        assert_eq!(sanitize_key("my-app_2"), "my-app_2");
        assert_eq!(sanitize_key("<script>"), "script");
        assert_eq!(sanitize_key("héllo"), "hllo");
        assert_eq!(sanitize_key(""), "");
    }

    #[test]
    fn keys_combine_sanitized_base_and_suffix() {
        assert_eq!(mode_key("my-app"), "my-app-mode");
        assert_eq!(theme_key("my-app"), "my-app-theme");
        assert_eq!(mode_key("a b/c"), "abc-mode");
        assert_eq!(theme_key("a b/c"), "abc-theme");
    }

    #[test]
    fn dirty_base_equals_clean_base() {
        assert_eq!(mode_key("a b/c"), mode_key("abc"));
        assert_eq!(theme_key("a b/c"), theme_key("abc"));
    }
}
