//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request field failed validation
    #[error("{0}")]
    Validation(String),

    /// User name already exists
    #[error("a user with that username already exists")]
    UserNameTaken,

    /// Email already registered
    #[error("a user with that email already exists")]
    EmailTaken,

    /// Unknown user name or wrong password
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Bearer token unknown, expired or malformed
    #[error("invalid or missing authentication token")]
    InvalidToken,

    /// Anonymous caller on a route that needs a user
    #[error("you must be logged in")]
    LoginRequired,

    /// Stored digest unusable or hashing failed
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] PasswordHashError),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserNameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::InvalidToken | AuthError::LoginRequired => {
                ErrorKind::Unauthorized
            }
            AuthError::PasswordHash(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
            AuthError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Database errors go through the kernel's SQLSTATE mapping.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()).with_source(other),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHash(e) => {
                tracing::error!(error = %e, "Password digest could not be processed");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid sign-in attempt");
            }
            AuthError::InvalidToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

/// Value objects report through `AppError`; client errors keep their message.
impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        if err.is_client_error() {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::Validation("x".into()).kind().status_code(), 400);
        assert_eq!(AuthError::UserNameTaken.kind().status_code(), 409);
        assert_eq!(AuthError::EmailTaken.kind().status_code(), 409);
        assert_eq!(AuthError::InvalidCredentials.kind().status_code(), 401);
        assert_eq!(AuthError::InvalidToken.kind().status_code(), 401);
        assert_eq!(AuthError::LoginRequired.kind().status_code(), 401);
        assert_eq!(
            AuthError::PasswordHash(PasswordHashError::InvalidHashFormat)
                .kind()
                .status_code(),
            500
        );
    }

    #[test]
    fn test_messages_are_client_facing() {
        let app = AuthError::LoginRequired.into_app_error();
        assert_eq!(app.client_message(), "you must be logged in");

        let app = AuthError::InvalidToken.into_app_error();
        assert_eq!(app.client_message(), "invalid or missing authentication token");

        let app = AuthError::Internal("pepper missing".into()).into_app_error();
        assert_eq!(app.client_message(), "internal server error");
    }

    #[test]
    fn test_from_app_error() {
        let err: AuthError = AppError::bad_request("invalid email format").into();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "invalid email format"));

        let err: AuthError = AppError::internal("boom").into();
        assert!(matches!(err, AuthError::Internal(_)));
    }

    #[test]
    fn test_pool_timeout_maps_to_unavailable() {
        let app = AuthError::Database(sqlx::Error::PoolTimedOut).into_app_error();
        assert_eq!(app.status_code(), 503);
    }
}
