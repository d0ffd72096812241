//! Pure predicates behind the built-in rules.
//!
//! Each function only answers yes or no; the [`StringRules`](crate::StringRules)
//! extension pairs them with catalog messages. They can also be used directly
//! inside [`Validator::is`](crate::Validator::is) closures.

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, with at least one dot in the domain and an alphabetic TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*\.[a-zA-Z]{2,}$").unwrap()
});

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 30;

/// Length in characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// `value` matches `pattern`. An invalid pattern never matches.
pub fn is_regex(value: &str, pattern: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(value))
}

pub fn is_min_length(value: &str, min: usize) -> bool {
    char_len(value) >= min
}

pub fn is_max_length(value: &str, max: usize) -> bool {
    char_len(value) <= max
}

pub fn is_exact_length(value: &str, length: usize) -> bool {
    char_len(value) == length
}

/// Inclusive on both ends.
pub fn is_between_length(value: &str, min: usize, max: usize) -> bool {
    (min..=max).contains(&char_len(value))
}

/// 8 to 30 characters with an uppercase letter, a lowercase letter and a digit.
pub fn is_password(value: &str) -> bool {
    let len = char_len(value);
    if !(PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&len) {
        return false;
    }

    let (mut upper, mut lower, mut digit) = (false, false, false);
    for c in value.chars() {
        upper |= c.is_uppercase();
        lower |= c.is_lowercase();
        digit |= c.is_ascii_digit();
    }
    upper && lower && digit
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(value)
}

pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

pub fn is_greater_than<T: PartialOrd>(value: T, bound: T) -> bool {
    value > bound
}

pub fn is_less_than<T: PartialOrd>(value: T, bound: T) -> bool {
    value < bound
}

/// Inclusive on both ends.
pub fn is_between<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_email() {
        assert!(is_email("test@email.com"));
        assert!(is_email("v@v.co"));
        assert!(is_email("user+tag@example.com"));
        assert!(is_email("test.user@domain.co.uk"));
        assert!(!is_email("InvalidEmail"));
        assert!(!is_email("@v.com"));
        assert!(!is_email("v@.co"));
        assert!(!is_email("v@v"));
        assert!(!is_email("test@ema"));
        assert!(!is_email(""));
    }

    #[test]
    fn test_is_regex() {
        assert!(is_regex("123-456-7890", r"^\d{3}-\d{3}-\d{4}$"));
        assert!(!is_regex("invalid", r"^\d{3}-\d{3}-\d{4}$"));
        assert!(!is_regex("anything", "("));
    }

    #[test]
    fn test_lengths_count_chars() {
        assert!(is_exact_length("héllo", 5));
        assert!(is_min_length("hello", 5));
        assert!(!is_min_length("four", 5));
        assert!(is_max_length("exact", 5));
        assert!(!is_max_length("sixsix", 5));
        assert!(is_between_length("hello", 5, 20));
        assert!(!is_between_length("hi", 5, 20));
        assert!(is_between_length("", 0, 0));
    }

    #[test]
    fn test_is_password() {
        assert!(is_password("Passw0rd"));
        assert!(!is_password("Pa55w0r"));
        assert!(!is_password("password1"));
        assert!(!is_password("PASSWORD1"));
        assert!(!is_password("Password"));
        assert!(!is_password(&format!("Aa1{}", "x".repeat(28))));
        assert!(is_password(&format!("Aa1{}", "x".repeat(27))));
    }

    #[test]
    fn test_character_classes() {
        assert!(is_alpha("abcXYZ"));
        assert!(!is_alpha("abc123"));
        assert!(is_alphanumeric("abc123"));
        assert!(!is_alphanumeric("abc-123"));
        assert!(is_numeric("12345"));
        assert!(!is_numeric("123.45"));
        assert!(!is_numeric(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_ordering() {
        assert!(is_greater_than(5, 1));
        assert!(!is_greater_than(1, 1));
        assert!(is_less_than(0.5, 1.0));
        assert!(is_between(10, 10, 20));
        assert!(is_between(20, 10, 20));
        assert!(!is_between(21, 10, 20));
    }
}
