//! Auth Router

use axum::{
    Router, middleware,
    routing::{patch, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::{TokenRepository, UserRepository};
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_user;

/// Create the Auth router for any repository implementation
///
/// The auth gate ([`authenticate`](crate::presentation::middleware::authenticate))
/// must be layered around the merged application router.
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + TokenRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState { repo, config };

    let public = Router::new()
        .route("/users", post(handlers::register::<R>))
        .route("/auth/sign-in", post(handlers::sign_in::<R>));

    let protected = Router::new()
        .route("/users/me", patch(handlers::update_profile::<R>))
        .route("/auth/sign-out", post(handlers::sign_out::<R>))
        .route_layer(middleware::from_fn(require_user));

    public.merge(protected).with_state(state)
}
