//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#][^\s]*\.[^\s]+$").unwrap()
});

/// Validates minimum length, counted in characters rather than bytes
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if s.chars().count() >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if s.chars().count() <= max {
        Ok(())
    } else {
        Err(format!("Must be at most {} characters", max))
    }
}

/// Regex pattern matching.
///
/// An invalid pattern never matches, so a misconfigured rule rejects input
/// instead of silently accepting it.
pub fn matches_regex(value: &str, pattern: &str) -> bool {
    match Regex::new(pattern) {
        Ok(regex) => regex.is_match(value),
        Err(_) => false,
    }
}

/// URL validation (http/https with a dotted host)
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Enum/value restriction
pub fn is_one_of<S: AsRef<str>>(value: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|a| a.as_ref() == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("hi", 3).is_err());

        assert!(validate_max_length("hello", 10).is_ok());
        assert!(validate_max_length("verylongstring", 5).is_err());
    }

    #[test]
    fn test_length_counts_characters() {
        // three characters, nine bytes
        assert!(validate_max_length("表单一", 3).is_ok());
        assert!(validate_min_length("表单一", 4).is_err());
    }

    #[test]
    fn test_regex() {
        assert!(matches_regex("abc123", r"^[a-z]+\d+$"));
        assert!(!matches_regex("123abc", r"^[a-z]+\d+$"));
        assert!(!matches_regex("anything", r"(unclosed"));
    }

    #[test]
    fn test_url() {
        assert!(is_valid_url("https://example.com"));
        assert!(is_valid_url("http://example.com/path?q=1"));
        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://localhost"));
    }

    #[test]
    fn test_one_of() {
        let allowed = ["admin", "user", "guest"];
        assert!(is_one_of("admin", &allowed));
        assert!(!is_one_of("superuser", &allowed));
    }
}
