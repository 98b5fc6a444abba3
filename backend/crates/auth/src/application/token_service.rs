//! Token Service
//!
//! Issues opaque bearer tokens and resolves presented tokens back to users.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use kernel::id::UserId;

use crate::domain::entity::token::{PlainToken, Token};
use crate::domain::entity::user::User;
use crate::domain::repository::TokenRepository;
use crate::domain::value_object::token_scope::TokenScope;
use crate::error::AuthResult;

/// A token handed out to the client
#[derive(Debug)]
pub struct IssuedToken {
    pub plaintext: PlainToken,
    pub expires_at: DateTime<Utc>,
}

/// Token issue/verify service
pub struct TokenService<T>
where
    T: TokenRepository,
{
    token_repo: Arc<T>,
}

impl<T> TokenService<T>
where
    T: TokenRepository,
{
    pub fn new(token_repo: Arc<T>) -> Self {
        Self { token_repo }
    }

    /// Generate, persist and return a token for `user_id`
    pub async fn issue(
        &self,
        user_id: UserId,
        ttl: Duration,
        scope: TokenScope,
    ) -> AuthResult<IssuedToken> {
        let (plaintext, token) = Token::generate(user_id, ttl, scope)?;
        self.token_repo.insert(&token).await?;

        tracing::debug!(
            user_id = %user_id,
            scope = %scope,
            expires_at = %token.expires_at,
            "Token issued"
        );

        Ok(IssuedToken {
            plaintext,
            expires_at: token.expires_at,
        })
    }

    /// Resolve a presented token
    ///
    /// Unknown, expired and wrong-scope tokens all yield `None`.
    pub async fn verify(
        &self,
        plaintext: &PlainToken,
        scope: TokenScope,
    ) -> AuthResult<Option<User>> {
        self.token_repo
            .find_user_by_token(&plaintext.digest(), scope, Utc::now())
            .await
    }

    /// Revoke every token of `scope` for `user_id`
    pub async fn delete_for_user(&self, user_id: UserId, scope: TokenScope) -> AuthResult<u64> {
        let deleted = self.token_repo.delete_for_user(user_id, scope).await?;
        tracing::debug!(user_id = %user_id, scope = %scope, deleted, "Tokens revoked");
        Ok(deleted)
    }

    /// Purge expired rows
    pub async fn cleanup_expired(&self) -> AuthResult<u64> {
        let deleted = self.token_repo.cleanup_expired(Utc::now()).await?;
        tracing::info!(tokens_deleted = deleted, "Cleaned up expired tokens");
        Ok(deleted)
    }
}
