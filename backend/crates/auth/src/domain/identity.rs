//! Identity and Session Data
//!
//! Read-only records owned and issued by the external auth provider.
//! This system never mutates them; field shape mirrors the provider's
//! get-session response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user record from the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Opaque user id, foreign key for everything this system stores
    pub id: String,
    pub email: String,
    pub name: String,
    pub email_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Identity {
    /// Display name for greetings: name, or email when name is empty
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Session record from the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub id: String,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

/// Full get-session payload: session plus the user it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthContext {
    pub session: SessionData,
    pub user: Identity,
}

impl AuthContext {
    /// Opaque id of the authenticated user
    pub fn user_id(&self) -> &str {
        &self.user.id
    }
}
