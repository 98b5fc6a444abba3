//! User Password Value Object
//!
//! Domain wrappers for user passwords.
//! Delegates to `platform::password` for cryptographic operations.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{UserPassword, RawPassword};
//!
//! // Create from user input
//! let raw = RawPassword::new("hunter22".to_string()).unwrap();
//!
//! // Hash for storage
//! let hashed = UserPassword::from_raw(&raw, None).unwrap();
//!
//! // Verify later
//! assert!(hashed.verify(&raw, None).unwrap());
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicyError,
};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Wrapper around `ClearTextPassword` with domain-specific error handling.
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, enforcing the registration policy
    ///
    /// ## Validation Rules
    /// - Minimum 6 characters
    /// - Maximum 128 characters
    /// - Not blank
    /// - Unicode NFKC normalized
    pub fn new(raw: String) -> AppResult<Self> {
        let clear_text = ClearTextPassword::new(raw).map_err(|e| match e {
            PasswordPolicyError::TooShort { min, .. } => AppError::bad_request(format!(
                "password must be at least {min} characters"
            )),
            PasswordPolicyError::TooLong { max, .. } => AppError::bad_request(format!(
                "password must be at most {max} characters"
            )),
            PasswordPolicyError::EmptyOrWhitespace => {
                AppError::bad_request("password is required")
            }
        })?;

        Ok(Self(clear_text))
    }

    /// Wrap a sign-in attempt without applying the policy
    pub fn attempt(raw: String) -> Self {
        Self(ClearTextPassword::candidate(raw))
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores password in Argon2id PHC string format.
/// Never serialized into responses.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Create from raw password by hashing
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> Result<Self, PasswordHashError> {
        raw.inner().hash(pepper).map(Self)
    }

    /// Wrap the PHC string read from the database
    pub fn from_db(phc_string: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(phc_string))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// `Ok(false)` is a mismatch. `Err` means the stored digest is unusable.
    pub fn verify(
        &self,
        raw: &RawPassword,
        pepper: Option<&[u8]>,
    ) -> Result<bool, PasswordHashError> {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_messages() {
        let err = RawPassword::new("abc".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "password must be at least 6 characters");

        let err = RawPassword::new("      ".to_string()).unwrap_err();
        assert_eq!(err.message(), "password is required");
    }

    #[test]
    fn test_attempt_skips_policy() {
        let stored = UserPassword::from_raw(&RawPassword::new("secret1".into()).unwrap(), None)
            .unwrap();
        // Too short to register, still checkable at sign-in
        assert!(!stored.verify(&RawPassword::attempt("abc".into()), None).unwrap());
    }

    #[test]
    fn test_db_roundtrip() {
        let raw = RawPassword::new("secret1".into()).unwrap();
        let stored = UserPassword::from_raw(&raw, None).unwrap();
        let loaded = UserPassword::from_db(stored.as_phc_string().to_string());
        assert!(loaded.verify(&raw, None).unwrap());
    }
}
