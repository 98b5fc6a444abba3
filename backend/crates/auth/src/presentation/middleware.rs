//! Auth Gate
//!
//! `authenticate` runs on every request and binds an [`Identity`] into the
//! request extensions. `require_user` guards routes that need a signed-in
//! caller.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::extract_bearer;

use crate::application::AuthenticateUseCase;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::TokenRepository;
use crate::error::AuthError;

/// Resolve the caller from the `Authorization` header
///
/// * no header - `Identity::Anonymous`, request continues
/// * valid token - `Identity::Authenticated`, request continues
/// * malformed header, unknown or expired token - 401, request halts
pub async fn authenticate<T>(
    State(token_repo): State<Arc<T>>,
    mut req: Request,
    next: Next,
) -> Response
where
    T: TokenRepository + Send + Sync + 'static,
{
    let bearer = match extract_bearer(req.headers()) {
        Ok(bearer) => bearer.map(str::to_owned),
        Err(e) => {
            tracing::debug!(error = %e, "Malformed Authorization header");
            return AuthError::InvalidToken.into_response();
        }
    };

    let identity = match AuthenticateUseCase::new(token_repo)
        .execute(bearer.as_deref())
        .await
    {
        Ok(identity) => identity,
        Err(e) => return e.into_response(),
    };

    req.extensions_mut().insert(identity);

    next.run(req).await
}

/// Reject anonymous callers
pub async fn require_user(req: Request, next: Next) -> Response {
    let anonymous = req
        .extensions()
        .get::<Identity>()
        .is_none_or(Identity::is_anonymous);

    if anonymous {
        return AuthError::LoginRequired.into_response();
    }

    next.run(req).await
}
