//! Auth Error Types
//!
//! Session-lookup error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// The session endpoint of the auth provider could not be reached
    #[error("Auth provider unreachable: {0}")]
    ProviderUnreachable(#[from] reqwest::Error),

    /// The provider answered with a body we could not decode
    #[error("Malformed session response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::ProviderUnreachable(_) | AuthError::MalformedResponse(_) => {
                ErrorKind::BadGateway
            }
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::ProviderUnreachable(e) => {
                tracing::error!(error = %e, "Auth provider unreachable");
            }
            AuthError::MalformedResponse(e) => {
                tracing::error!(error = %e, "Malformed session response from auth provider");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
