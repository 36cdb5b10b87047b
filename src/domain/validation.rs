//! Field-level validation shared by inventory records and booking requests.

use thiserror::Error;

/// A value that failed a domain constraint.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// US ZIP code: exactly five ASCII digits.
pub fn is_valid_zip(zip: &str) -> bool {
    zip.len() == 5 && zip.chars().all(|c| c.is_ascii_digit())
}

/// Loose email shape check: `local@domain.tld` with a 2+ letter TLD.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Phone number: optional `+`, optional leading `1`, then 9 to 15 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let len = digits.len();
    // The country-code `1` is optional, so either reading may satisfy the length.
    (9..=15).contains(&len) || (digits.starts_with('1') && (10..=16).contains(&len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_validation() {
        assert!(is_valid_zip("48226"));
        assert!(!is_valid_zip("4822"));
        assert!(!is_valid_zip("48a26"));
        assert!(!is_valid_zip("482261"));
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("jordan.lee+cars@example.com"));
        assert!(is_valid_email("a@b.io"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("someone@example"));
        assert!(!is_valid_email("someone@example.c"));
        assert!(!is_valid_email("some one@example.com"));
    }

    #[test]
    fn test_phone_validation() {
        assert!(is_valid_phone("3135550123"));
        assert!(is_valid_phone("+13135550123"));
        assert!(is_valid_phone("123456789"));
        assert!(!is_valid_phone("12345678"));
        assert!(!is_valid_phone("313-555-0123"));
        assert!(!is_valid_phone("+1234567890123456789"));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("zip", "must be 5 digits");
        assert_eq!(err.to_string(), "invalid zip: must be 5 digits");
    }
}
