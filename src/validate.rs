//! Input validators for the URL, email and phone fields.
//!
//! Validation failures are values, not errors: callers inspect
//! [`ValidationResult::valid`].

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Outcome of [`validate`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self { valid: true, error: None }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            error: Some(message.to_string()),
        }
    }
}

/// The kind of input being checked.
///
/// Unrecognized kinds map to [`DataKind::Other`] and always pass, since
/// free-text categories carry no format.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DataKind {
    Url,
    Email,
    Phone,
    Other,
}

impl From<&str> for DataKind {
    fn from(kind: &str) -> Self {
        match kind {
            "url" => DataKind::Url,
            "email" => DataKind::Email,
            "phone" => DataKind::Phone,
            _ => DataKind::Other,
        }
    }
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would admit every Unicode digit.
    RE.get_or_init(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid"))
}

/// Checks `data` against the format expected for `kind`.
///
/// # Example
///
/// ```
/// use qirust_utils::validate::validate;
///
/// assert!(validate("https://a.co", "url").valid);
/// assert_eq!(validate("a@b", "email").error.as_deref(), Some("Invalid email format"));
/// assert!(validate("anything at all", "note").valid);
/// ```
pub fn validate(data: &str, kind: impl Into<DataKind>) -> ValidationResult {
    match kind.into() {
        DataKind::Url => {
            if url::Url::parse(data).is_ok() {
                ValidationResult::ok()
            } else {
                ValidationResult::invalid("Invalid URL format")
            }
        }
        DataKind::Email => {
            if email_regex().is_match(data) {
                ValidationResult::ok()
            } else {
                ValidationResult::invalid("Invalid email format")
            }
        }
        DataKind::Phone => {
            let digits: String = data
                .chars()
                .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
                .collect();
            if phone_regex().is_match(&digits) {
                ValidationResult::ok()
            } else {
                ValidationResult::invalid("Invalid phone number format")
            }
        }
        DataKind::Other => ValidationResult::ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_url() {
        assert!(validate("https://a.co", "url").valid);
        assert!(validate("http://localhost:8080/path?q=1", "url").valid);
        let result = validate("not a url", "url");
        assert!(!result.valid);
        assert_eq!(result.error.as_deref(), Some("Invalid URL format"));
        assert!(!validate("", "url").valid);
        assert!(!validate("/relative/path", "url").valid);
    }

    #[test]
    fn test_email() {
        assert_eq!(validate("a@b.co", "email"), ValidationResult::ok());
        assert!(!validate("a@b", "email").valid);
        assert!(!validate("a b@c.de", "email").valid);
        assert!(!validate("a@@b.co", "email").valid);
        assert_eq!(
            validate("@b.co", "email").error.as_deref(),
            Some("Invalid email format")
        );
    }

    #[test]
    fn test_phone() {
        assert!(validate("+15551234567", "phone").valid);
        assert!(validate("+1 (555) 123-4567", "phone").valid);
        assert!(validate("7", "phone").valid);
        assert!(validate("1234567890123456", "phone").valid);
        assert!(!validate("12345678901234567", "phone").valid);
        assert!(!validate("0123", "phone").valid);
        assert!(!validate("++123", "phone").valid);
        assert!(!validate("", "phone").valid);
        let result = validate("abc", "phone");
        assert_eq!(result.error.as_deref(), Some("Invalid phone number format"));
    }

    #[test]
    fn unknown_kind_always_passes() {
        assert!(validate("", "text").valid);
        assert!(validate("not a url", "URL").valid);
        assert!(validate("@@@", DataKind::Other).valid);
    }

    #[test]
    fn invalid_result_serializes_error() {
        let json = serde_json::to_string(&validate("x", "email")).unwrap();
        assert_eq!(json, r#"{"valid":false,"error":"Invalid email format"}"#);
        let json = serde_json::to_string(&ValidationResult::ok()).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
    }

    proptest! {
        #[test]
        fn validate_is_total(data in ".*", kind in prop::sample::select(vec!["url", "email", "phone", "other"])) {
            let result = validate(&data, kind);
            prop_assert_eq!(result.valid, result.error.is_none());
        }
    }
}
