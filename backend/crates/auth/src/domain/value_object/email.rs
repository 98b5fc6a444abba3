//! Email Value Object
//!
//! Represents a validated email address.
//! Format validation only; the address is never confirmed.

use kernel::error::app_error::{AppError, AppResult};
use regex::Regex;
use std::str::FromStr;
use std::sync::LazyLock;

/// Maximum email length (matches the column width)
pub const EMAIL_MAX_LENGTH: usize = 255;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    ///
    /// Surrounding whitespace is trimmed; case is preserved.
    pub fn new(email: impl Into<String>) -> AppResult<Self> {
        let email = email.into().trim().to_string();

        if email.is_empty() {
            return Err(AppError::bad_request("email is required"));
        }

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "email must be at most {EMAIL_MAX_LENGTH} characters"
            )));
        }

        if !EMAIL_PATTERN.is_match(&email) {
            return Err(AppError::bad_request("invalid email format"));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for email in [
            "alice@example.com",
            "Alice.Smith+gym@mail.example.co",
            "a_b%c-d@sub-domain.example.org",
        ] {
            assert!(Email::new(email).is_ok(), "{email} should be accepted");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "plainaddress",
            "@example.com",
            "alice@",
            "alice@example",
            "alice@example.c",
            "alice smith@example.com",
            "alice@exa mple.com",
        ] {
            assert!(Email::new(email).is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn test_empty_is_required_error() {
        let err = Email::new("  ").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "email is required");
    }

    #[test]
    fn test_too_long() {
        let local = "a".repeat(EMAIL_MAX_LENGTH);
        let err = Email::new(format!("{local}@example.com")).unwrap_err();
        assert_eq!(err.message(), "email must be at most 255 characters");
    }

    #[test]
    fn test_trim_and_case_preserved() {
        let email = Email::new("  Alice@Example.com ").unwrap();
        assert_eq!(email.as_str(), "Alice@Example.com");
    }
}
