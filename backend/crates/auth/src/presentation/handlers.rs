//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::envelope::Data;
use kernel::extract::Json;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    RegisterUserInput, RegisterUserUseCase, SignInInput, SignInUseCase, SignOutUseCase,
    UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::repository::{TokenRepository, UserRepository};
use crate::error::AuthResult;
use crate::presentation::dto::{
    RegisterRequest, SignInRequest, SignInResponse, UpdateProfileRequest, UserResponse,
};
use crate::presentation::extract::CurrentUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + TokenRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Users
// ============================================================================

/// POST /users
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + TokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUserUseCase::new(state.repo.clone(), state.config.clone());

    let user = use_case
        .execute(RegisterUserInput {
            user_name: req.username,
            email: req.email,
            password: req.password,
            bio: req.bio,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Data::new(UserResponse::from(user))),
    ))
}

/// PATCH /users/me
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user): CurrentUser,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<Data<UserResponse>>>
where
    R: UserRepository + TokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateProfileUseCase::new(state.repo.clone());

    let user = use_case
        .execute(
            user,
            UpdateProfileInput {
                email: req.email,
                bio: req.bio,
            },
        )
        .await?;

    Ok(Json(Data::new(UserResponse::from(user))))
}

// ============================================================================
// Sign In / Sign Out
// ============================================================================

/// POST /auth/sign-in
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + TokenRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let issued = use_case
        .execute(SignInInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignInResponse {
            token: issued.plaintext.as_str().to_string(),
            expires_at: issued.expires_at,
        }),
    ))
}

/// POST /auth/sign-out
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    CurrentUser(user): CurrentUser,
) -> AuthResult<StatusCode>
where
    R: UserRepository + TokenRepository + Clone + Send + Sync + 'static,
{
    SignOutUseCase::new(state.repo.clone()).execute(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}
