//! User Name Value Object
//!
//! ユーザー名はサインインに使う**公開識別子（ハンドル）**。
//!
//! ## 設計方針
//! - NFKC正規化 → 前後の空白除去 → 検証 の順で処理
//! - 大文字・小文字は区別して保存する（一意性も大文字小文字を区別）
//!
//! ## 不変条件
//! - 長さ: 3〜20文字（正規化後、Unicode コードポイント数）

use std::fmt;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 20;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserNameError {
    /// User name is empty after normalization
    Empty,

    /// User name is shorter than USER_NAME_MIN_LENGTH or longer than USER_NAME_MAX_LENGTH
    OutOfRange { length: usize },
}

impl fmt::Display for UserNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username is required"),
            Self::OutOfRange { .. } => write!(
                f,
                "username must be between {USER_NAME_MIN_LENGTH} and {USER_NAME_MAX_LENGTH} characters"
            ),
        }
    }
}

impl std::error::Error for UserNameError {}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated, normalized user name
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new UserName from raw input
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized = Self::normalize(input.as_ref());
        Self::validate(&normalized)?;
        Ok(Self(normalized))
    }

    /// Create from database values (assumes already validated)
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Normalize input string (NFKC and trim, preserve case)
    fn normalize(input: &str) -> String {
        input.nfkc().collect::<String>().trim().to_string()
    }

    fn validate(normalized: &str) -> Result<(), UserNameError> {
        if normalized.is_empty() {
            return Err(UserNameError::Empty);
        }

        let length = normalized.chars().count();
        if !(USER_NAME_MIN_LENGTH..=USER_NAME_MAX_LENGTH).contains(&length) {
            return Err(UserNameError::OutOfRange { length });
        }

        Ok(())
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserName").field(&self.0).finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod normalization {
        use super::*;

        #[test]
        fn test_trim_whitespace() {
            let name = UserName::new("  alice  ").unwrap();
            assert_eq!(name.as_str(), "alice");
        }

        #[test]
        fn test_case_preserved() {
            let name = UserName::new("AlIcE_123").unwrap();
            assert_eq!(name.as_str(), "AlIcE_123");
        }

        #[test]
        fn test_nfkc_normalization() {
            // Full-width 'Ａ' (U+FF21) normalizes to ASCII 'A'
            let name = UserName::new("Ａlice").unwrap();
            assert_eq!(name.as_str(), "Alice");
        }
    }

    mod length {
        use super::*;

        #[test]
        fn test_empty() {
            assert_eq!(UserName::new("").unwrap_err(), UserNameError::Empty);
            assert_eq!(UserName::new("   ").unwrap_err(), UserNameError::Empty);
        }

        #[test]
        fn test_bounds() {
            assert_eq!(
                UserName::new("ab").unwrap_err(),
                UserNameError::OutOfRange { length: 2 }
            );
            assert!(UserName::new("abc").is_ok());
            assert!(UserName::new("a".repeat(20)).is_ok());
            assert_eq!(
                UserName::new("a".repeat(21)).unwrap_err(),
                UserNameError::OutOfRange { length: 21 }
            );
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            // 3 characters, 9 bytes
            assert!(UserName::new("田中太").is_ok());
        }

        #[test]
        fn test_error_message() {
            let err = UserName::new("ab").unwrap_err();
            assert_eq!(
                err.to_string(),
                "username must be between 3 and 20 characters"
            );
        }
    }
}
