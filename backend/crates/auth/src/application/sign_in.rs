//! Sign In Use Case
//!
//! Checks credentials and issues an authentication token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token_service::{IssuedToken, TokenService};
use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::value_object::{
    token_scope::TokenScope, user_name::UserName, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    user_repo: Arc<U>,
    tokens: TokenService<T>,
    config: Arc<AuthConfig>,
}

impl<U, T> SignInUseCase<U, T>
where
    U: UserRepository,
    T: TokenRepository,
{
    pub fn new(user_repo: Arc<U>, token_repo: Arc<T>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            tokens: TokenService::new(token_repo),
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<IssuedToken> {
        // A name that could never have registered cannot match anyone
        let user_name =
            UserName::new(&input.user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let raw_password = RawPassword::attempt(input.password);

        // A malformed digest surfaces as PasswordHash (500), not as bad credentials
        if !user
            .password_hash
            .verify(&raw_password, self.config.pepper())?
        {
            return Err(AuthError::InvalidCredentials);
        }

        let ttl = self
            .config
            .token_ttl_chrono()
            .ok_or_else(|| AuthError::Internal("token TTL out of range".to_string()))?;

        let issued = self
            .tokens
            .issue(user.id, ttl, TokenScope::Authentication)
            .await?;

        tracing::info!(
            user_id = %user.id,
            expires_at = %issued.expires_at,
            "User signed in"
        );

        Ok(issued)
    }
}
