//! HTTP Session Verifier
//!
//! Calls the auth provider's get-session endpoint, forwarding the
//! request's cookie header verbatim.

use reqwest::header;

use crate::domain::identity::AuthContext;
use crate::domain::verifier::SessionVerifier;
use crate::error::AuthResult;

/// Path of the session lookup endpoint on the provider
const GET_SESSION_PATH: &str = "/api/auth/get-session";

/// Session verifier backed by the provider's HTTP API
#[derive(Debug, Clone)]
pub struct HttpSessionVerifier {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSessionVerifier {
    /// Create a verifier against the given provider base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a verifier with a preconfigured client (timeouts, proxies)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Full URL of the session endpoint
    pub fn session_url(&self) -> String {
        format!("{}{}", self.base_url, GET_SESSION_PATH)
    }
}

impl SessionVerifier for HttpSessionVerifier {
    async fn verify(&self, cookie_header: &str) -> AuthResult<Option<AuthContext>> {
        let response = self
            .client
            .get(self.session_url())
            .header(header::COOKIE, cookie_header)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "Session lookup returned non-success status");
            return Ok(None);
        }

        // The provider answers `null` when there is no session
        let body = response.text().await?;
        let body = body.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let ctx: AuthContext = serde_json::from_str(body)?;
        Ok(Some(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_url_strips_trailing_slash() {
        let verifier = HttpSessionVerifier::new("http://localhost:3000/");
        assert_eq!(
            verifier.session_url(),
            "http://localhost:3000/api/auth/get-session"
        );
    }

    #[test]
    fn test_session_url_plain_base() {
        let verifier = HttpSessionVerifier::new("https://app.example.com");
        assert_eq!(
            verifier.session_url(),
            "https://app.example.com/api/auth/get-session"
        );
    }
}
