//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Validates basic email format
///
/// Beyond the pattern, the domain may not contain consecutive dots or start
/// with a dot or hyphen.
pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_REGEX.is_match(email) {
        return false;
    }

    let Some((_, domain)) = email.split_once('@') else {
        return false;
    };

    !(domain.contains("..") || domain.starts_with('.') || domain.starts_with('-'))
}
