//! Profile Error Types
//!
//! Profile-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Profile-specific result type alias
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Profile-specific error variants
#[derive(Debug, Error)]
pub enum ProfileError {
    /// No session on a session-gated operation
    #[error("Authentication required")]
    AuthRequired,

    /// The session lookup against the auth provider failed
    #[error("Session lookup failed: {0}")]
    SessionLookup(#[from] auth::AuthError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfileError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::AuthRequired => ErrorKind::Unauthorized,
            ProfileError::SessionLookup(_) => ErrorKind::BadGateway,
            ProfileError::Database(_) | ProfileError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProfileError::Database(e) => {
                tracing::error!(error = %e, "Profile database error");
            }
            ProfileError::SessionLookup(e) => {
                tracing::error!(error = %e, "Profile session lookup error");
            }
            ProfileError::Internal(msg) => {
                tracing::error!(message = %msg, "Profile internal error");
            }
            ProfileError::AuthRequired => {
                tracing::debug!("Unauthenticated profile access");
            }
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
