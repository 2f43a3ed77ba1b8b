//! Input validation rules
//!
//! A [`Validator`] takes the field text and returns `None` when it is valid
//! or a human-readable message when it is not. Rules compose with
//! [`combine`], which reports the first failure and nothing after it.

use regex::Regex;
use std::sync::OnceLock;

/// A single validation rule
pub type Validator = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?[0-9][0-9\s\-()]{6,}$").unwrap())
}

/// The field must not be empty after trimming
pub fn required(field: impl Into<String>) -> Validator {
    let field = field.into();
    Box::new(move |value| {
        if value.trim().is_empty() {
            Some(format!("{} is required", field))
        } else {
            None
        }
    })
}

/// The field must look like an email address
pub fn email() -> Validator {
    Box::new(|value| {
        if email_regex().is_match(value.trim()) {
            None
        } else {
            Some("Enter a valid email address".to_string())
        }
    })
}

/// The field must be at least `min` characters
pub fn min_length(min: usize) -> Validator {
    Box::new(move |value| {
        if value.chars().count() < min {
            Some(format!("Must be at least {} characters", min))
        } else {
            None
        }
    })
}

/// The field must be at most `max` characters
pub fn max_length(max: usize) -> Validator {
    Box::new(move |value| {
        if value.chars().count() > max {
            Some(format!("Must be at most {} characters", max))
        } else {
            None
        }
    })
}

/// The field must contain digits only
pub fn numeric() -> Validator {
    Box::new(|value| {
        if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
            None
        } else {
            Some("Numbers only".to_string())
        }
    })
}

/// The field must contain letters and digits only
pub fn alphanumeric() -> Validator {
    Box::new(|value| {
        if !value.is_empty() && value.chars().all(|c| c.is_alphanumeric()) {
            None
        } else {
            Some("Letters and numbers only".to_string())
        }
    })
}

/// The field must look like a phone number
pub fn phone_number() -> Validator {
    Box::new(|value| {
        if phone_regex().is_match(value.trim()) {
            None
        } else {
            Some("Enter a valid phone number".to_string())
        }
    })
}

/// Run rules in order, reporting the first failure
pub fn combine(rules: Vec<Validator>) -> Validator {
    Box::new(move |value| rules.iter().find_map(|rule| rule(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let rule = required("Email");
        assert_eq!(rule("   "), Some("Email is required".to_string()));
        assert_eq!(rule("x"), None);
    }

    #[test]
    fn test_email() {
        let rule = email();
        assert!(rule("someone@example.com").is_none());
        assert!(rule("someone@example").is_some());
        assert!(rule("not an email").is_some());
    }

    #[test]
    fn test_length_bounds() {
        assert!(min_length(3)("ab").is_some());
        assert!(min_length(3)("abc").is_none());
        assert!(max_length(3)("abcd").is_some());
        assert!(max_length(3)("abc").is_none());
    }

    #[test]
    fn test_numeric_and_alphanumeric() {
        assert!(numeric()("12345").is_none());
        assert!(numeric()("12a45").is_some());
        assert!(numeric()("").is_some());
        assert!(alphanumeric()("abc123").is_none());
        assert!(alphanumeric()("abc 123").is_some());
    }

    #[test]
    fn test_phone_number() {
        let rule = phone_number();
        assert!(rule("+61 400 123 456").is_none());
        assert!(rule("(02) 9555-0123").is_none());
        assert!(rule("call me").is_some());
    }

    #[test]
    fn test_combine_reports_first_failure() {
        let rule = combine(vec![required("Password"), min_length(6)]);
        assert_eq!(rule(""), Some("Password is required".to_string()));
        assert_eq!(rule("abc"), Some("Must be at least 6 characters".to_string()));
        assert_eq!(rule("abcdef"), None);
    }
}
