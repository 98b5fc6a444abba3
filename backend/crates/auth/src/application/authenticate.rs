//! Authenticate Use Case
//!
//! Turns the bearer credential of a request into an [`Identity`].

use std::sync::Arc;

use crate::application::token_service::TokenService;
use crate::domain::entity::identity::Identity;
use crate::domain::entity::token::PlainToken;
use crate::domain::repository::TokenRepository;
use crate::domain::value_object::token_scope::TokenScope;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<T>
where
    T: TokenRepository,
{
    tokens: TokenService<T>,
}

impl<T> AuthenticateUseCase<T>
where
    T: TokenRepository,
{
    pub fn new(token_repo: Arc<T>) -> Self {
        Self {
            tokens: TokenService::new(token_repo),
        }
    }

    /// Resolve the caller
    ///
    /// * `None` - no credential presented, the caller is anonymous
    /// * `Some(token)` - the token must resolve, otherwise `InvalidToken`
    pub async fn execute(&self, bearer: Option<&str>) -> AuthResult<Identity> {
        let Some(bearer) = bearer else {
            return Ok(Identity::Anonymous);
        };

        let presented = PlainToken::presented(bearer);

        match self
            .tokens
            .verify(&presented, TokenScope::Authentication)
            .await?
        {
            Some(user) => Ok(Identity::Authenticated(user)),
            None => Err(AuthError::InvalidToken),
        }
    }
}
