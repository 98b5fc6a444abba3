//! Workout Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Workout-specific result type alias
pub type WorkoutResult<T> = Result<T, WorkoutError>;

/// Workout-specific error variants
#[derive(Debug, Error)]
pub enum WorkoutError {
    /// Request field failed validation
    #[error("{0}")]
    Validation(String),

    /// No workout with that id
    #[error("workout does not exist")]
    NotFound,

    /// Caller is not the owner
    #[error("you are not authorized to modify this workout")]
    Forbidden,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl WorkoutError {
    pub fn validation(message: impl Into<String>) -> Self {
        WorkoutError::Validation(message.into())
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WorkoutError::Validation(_) => ErrorKind::BadRequest,
            WorkoutError::NotFound => ErrorKind::NotFound,
            WorkoutError::Forbidden => ErrorKind::Forbidden,
            WorkoutError::Database(_) | WorkoutError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Database errors go through the kernel's SQLSTATE mapping, so a
    /// check-constraint violation still surfaces as 400.
    pub fn into_app_error(self) -> AppError {
        match self {
            WorkoutError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()).with_source(other),
        }
    }

    fn log(&self) {
        match self {
            WorkoutError::Database(e) => {
                tracing::error!(error = %e, "Workout database error");
            }
            WorkoutError::Internal(msg) => {
                tracing::error!(message = %msg, "Workout internal error");
            }
            WorkoutError::Forbidden => {
                tracing::warn!("Workout mutation by non-owner rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Workout error");
            }
        }
    }
}

impl IntoResponse for WorkoutError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(WorkoutError::validation("x").kind().status_code(), 400);
        assert_eq!(WorkoutError::NotFound.kind().status_code(), 404);
        assert_eq!(WorkoutError::Forbidden.kind().status_code(), 403);
        assert_eq!(WorkoutError::Internal("x".into()).kind().status_code(), 500);
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(
            WorkoutError::NotFound.into_app_error().client_message(),
            "workout does not exist"
        );
        assert_eq!(
            WorkoutError::Internal("lost entries".into())
                .into_app_error()
                .client_message(),
            "internal server error"
        );
    }
}
