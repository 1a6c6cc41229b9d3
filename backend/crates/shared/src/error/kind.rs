//! Error Kind - Classification of errors
//!
//! [`ErrorKind`] maps every application error onto an HTTP status code.

use serde::Serialize;
use std::fmt;

/// Error classification, aligned with RFC 9110 status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// 400 - Malformed or invalid request
    BadRequest,
    /// 401 - Authentication required or failed
    Unauthorized,
    /// 403 - Authenticated but not allowed
    Forbidden,
    /// 404 - Resource does not exist
    NotFound,
    /// 409 - State conflict (duplicate key, etc.)
    Conflict,
    /// 422 - Well-formed but semantically invalid
    UnprocessableEntity,
    /// 429 - Rate limited
    TooManyRequests,
    /// 500 - Unexpected server failure
    InternalServerError,
    /// 502 - Upstream collaborator failed
    BadGateway,
    /// 503 - Temporarily unable to serve
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::InternalServerError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Human-readable title (used in problem responses)
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::TooManyRequests => "Too Many Requests",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::BadGateway => "Bad Gateway",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// True for 5xx kinds
    pub fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// True for 4xx kinds
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
