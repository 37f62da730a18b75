//! Identifier normalization for generated code.
//!
//! User-facing names ("Weather Data Provider", "get current weather") are
//! turned into identifiers legal in both Python and TypeScript. One
//! implementation serves every consumer — source renderer, deployment
//! renderer, image names — so the normalized form never diverges between
//! artifacts.
//!
//! # Examples
//!
//! ```
//! use forge_core::normalize_identifier;
//!
//! assert_eq!(normalize_identifier("Weather Data Provider"), "weather_data_provider");
//! assert_eq!(normalize_identifier("get current weather"), "get_current_weather");
//! ```

/// Normalizes a raw name into an identifier legal in Python and TypeScript.
///
/// Rules: ASCII-lowercase; every run of non-alphanumeric characters becomes
/// a single `_`; leading and trailing separator runs are dropped; a result
/// starting with a digit is prefixed with `_`. The function is idempotent:
/// `normalize_identifier(normalize_identifier(s)) == normalize_identifier(s)`.
///
/// Returns an empty string when the input contains no alphanumeric
/// characters at all. Callers must treat an empty result as a validation
/// failure; it is never a legal identifier.
///
/// # Examples
///
/// ```
/// use forge_core::normalize_identifier;
///
/// assert_eq!(normalize_identifier("My API v2!"), "my_api_v2");
/// assert_eq!(normalize_identifier("  spaced   out  "), "spaced_out");
/// assert_eq!(normalize_identifier("9lives"), "_9lives");
/// assert_eq!(normalize_identifier("!!!"), "");
/// ```
#[must_use]
pub fn normalize_identifier(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_separator = false;

    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('_');
            }
            pending_separator = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }

    out
}

/// Normalizes a server name for use as a container image name.
///
/// Image names use `-` as the separator by container-registry convention
/// but derive from the same normalization pass, keeping the Dockerfile tag
/// and every platform config that references it consistent.
///
/// # Examples
///
/// ```
/// use forge_core::image_name;
///
/// assert_eq!(image_name("Weather Data Provider"), "weather-data-provider");
/// ```
#[must_use]
pub fn image_name(raw: &str) -> String {
    // Registries accept digit-leading names, so the `_` digit guard is not
    // wanted here; a leading `-` would be rejected instead.
    normalize_identifier(raw)
        .replace('_', "-")
        .trim_start_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapses_to_single_underscore() {
        assert_eq!(normalize_identifier("get current weather"), "get_current_weather");
        assert_eq!(normalize_identifier("a \t\n b"), "a_b");
    }

    #[test]
    fn test_lowercasing() {
        assert_eq!(normalize_identifier("GetWeather"), "getweather");
        assert_eq!(normalize_identifier("API"), "api");
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        assert_eq!(normalize_identifier("user-name.first"), "user_name_first");
        assert_eq!(normalize_identifier("a/b\\c"), "a_b_c");
    }

    #[test]
    fn test_leading_trailing_separators_trimmed() {
        assert_eq!(normalize_identifier("  hello  "), "hello");
        assert_eq!(normalize_identifier("__hello__"), "hello");
        assert_eq!(normalize_identifier("--x--"), "x");
    }

    #[test]
    fn test_leading_digit_prefixed() {
        assert_eq!(normalize_identifier("9lives"), "_9lives");
        assert_eq!(normalize_identifier("42"), "_42");
    }

    #[test]
    fn test_no_alphanumerics_yields_empty() {
        assert_eq!(normalize_identifier(""), "");
        assert_eq!(normalize_identifier("!!!"), "");
        assert_eq!(normalize_identifier(" \t "), "");
        // Non-ASCII letters are outside the identifier alphabet
        assert_eq!(normalize_identifier("日本語"), "");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "Weather Data Provider",
            "get current weather",
            "9lives",
            "__trailing__",
            "MiXeD CaSe-42",
            "a",
            "",
            "!!!",
            "Ünïcode mix 3",
        ];
        for s in samples {
            let once = normalize_identifier(s);
            let twice = normalize_identifier(&once);
            assert_eq!(once, twice, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_output_alphabet_is_identifier_safe() {
        let samples = ["Weather Data Provider", "9 to 5!", "x--y", "a.b.c"];
        for s in samples {
            let ident = normalize_identifier(s);
            assert!(
                ident
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
                "illegal character in {ident:?}"
            );
            if let Some(first) = ident.chars().next() {
                assert!(!first.is_ascii_digit());
            }
        }
    }

    #[test]
    fn test_image_name_uses_hyphens() {
        assert_eq!(image_name("Weather Data Provider"), "weather-data-provider");
        assert_eq!(image_name("My API v2"), "my-api-v2");
    }
}
