//! Token Entity
//!
//! Opaque bearer tokens. Only the SHA-256 digest of the plaintext is stored;
//! the plaintext is handed to the client once and then dropped.

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::value_object::token_scope::TokenScope;
use crate::error::{AuthError, AuthResult};

/// Random bytes per token (256 bits)
pub const TOKEN_BYTES: usize = 32;

/// SHA-256 digest of a plaintext token
pub type TokenHash = [u8; 32];

/// Persisted token row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lookup key
    pub hash: TokenHash,
    /// Owning user
    pub user_id: UserId,
    /// What the token may be used for
    pub scope: TokenScope,
    /// Invalid from this instant on
    pub expires_at: DateTime<Utc>,
}

impl Token {
    /// Generate a fresh token for `user_id`
    ///
    /// Returns the plaintext (to give to the client) and the row to persist.
    /// Fails when `ttl` pushes the expiry past the representable range.
    pub fn generate(
        user_id: UserId,
        ttl: Duration,
        scope: TokenScope,
    ) -> AuthResult<(PlainToken, Self)> {
        let expires_at = Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Internal("token expiry out of range".to_string()))?;

        let plain = PlainToken(platform::crypto::to_base64_url(
            &platform::crypto::random_bytes(TOKEN_BYTES),
        ));

        let token = Self {
            hash: plain.digest(),
            user_id,
            scope,
            expires_at,
        };

        Ok((plain, token))
    }

    /// Check expiry against `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Plaintext token as presented by (or returned to) the client
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainToken(String);

impl PlainToken {
    /// Wrap a token presented in a request
    pub fn presented(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digest used as the storage key
    pub fn digest(&self) -> TokenHash {
        platform::crypto::sha256(self.0.as_bytes())
    }
}

impl fmt::Debug for PlainToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainToken").field(&"[REDACTED]").finish()
    }
}

// Scope isolation has no test here: `TokenScope` has a single variant, so there
// is no second scope to verify against. Both repositories still match on
// `(hash, scope, expires_at)`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_binds_digest_to_plaintext() {
        let (plain, token) =
            Token::generate(UserId::new(7), Duration::hours(24), TokenScope::Authentication)
                .unwrap();

        assert_eq!(token.hash, plain.digest());
        assert_eq!(token.user_id, UserId::new(7));
        assert_eq!(token.scope, TokenScope::Authentication);
        // 32 bytes, unpadded base64
        assert_eq!(plain.as_str().len(), 43);
        assert!(!plain.as_str().contains('='));
    }

    #[test]
    fn test_tokens_are_unique() {
        let generate = || {
            Token::generate(UserId::new(1), Duration::hours(1), TokenScope::Authentication)
                .unwrap()
        };
        let (a, _) = generate();
        let (b, _) = generate();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_expiry() {
        let (_, token) =
            Token::generate(UserId::new(1), Duration::hours(24), TokenScope::Authentication)
                .unwrap();
        let now = Utc::now();
        assert!(!token.is_expired_at(now));
        assert!(token.is_expired_at(now + Duration::hours(25)));
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let result = Token::generate(UserId::new(1), Duration::MAX, TokenScope::Authentication);
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }

    #[test]
    fn test_presented_digest_matches() {
        let (plain, token) =
            Token::generate(UserId::new(1), Duration::hours(1), TokenScope::Authentication)
                .unwrap();
        let presented = PlainToken::presented(plain.as_str().to_string());
        assert_eq!(presented.digest(), token.hash);
    }

    #[test]
    fn test_debug_redacted() {
        let plain = PlainToken::presented("abc");
        assert!(!format!("{plain:?}").contains("abc"));
    }
}
