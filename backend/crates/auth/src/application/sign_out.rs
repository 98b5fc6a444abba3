//! Sign Out Use Case
//!
//! Revokes every authentication token of the caller.

use std::sync::Arc;

use crate::application::token_service::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::TokenRepository;
use crate::domain::value_object::token_scope::TokenScope;
use crate::error::AuthResult;

/// Sign out use case
pub struct SignOutUseCase<T>
where
    T: TokenRepository,
{
    tokens: TokenService<T>,
}

impl<T> SignOutUseCase<T>
where
    T: TokenRepository,
{
    pub fn new(token_repo: Arc<T>) -> Self {
        Self {
            tokens: TokenService::new(token_repo),
        }
    }

    pub async fn execute(&self, user: &User) -> AuthResult<()> {
        let revoked = self
            .tokens
            .delete_for_user(user.id, TokenScope::Authentication)
            .await?;

        tracing::info!(user_id = %user.id, revoked, "User signed out");

        Ok(())
    }
}
