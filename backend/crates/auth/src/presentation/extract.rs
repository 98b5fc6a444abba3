//! Identity Extractors

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::entity::{identity::Identity, user::User};
use crate::error::AuthError;

/// The signed-in caller
///
/// Rejects with 401 when the auth gate bound no user.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .and_then(Identity::user)
            .cloned()
            .map(CurrentUser)
            .ok_or(AuthError::LoginRequired)
    }
}
