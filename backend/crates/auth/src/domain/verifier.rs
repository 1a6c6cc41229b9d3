//! Session Verifier Trait
//!
//! The single capability this system has against the auth provider:
//! a pure lookup from request cookies to the current session. The
//! implementation lives in the infrastructure layer.

use crate::domain::identity::AuthContext;
use crate::error::AuthResult;

/// Session verifier trait
#[trait_variant::make(SessionVerifier: Send)]
pub trait LocalSessionVerifier {
    /// Ask the provider for the session bound to the given cookie header.
    ///
    /// `Ok(None)` means no valid session; errors mean the lookup itself
    /// failed (provider unreachable, malformed response).
    async fn verify(&self, cookie_header: &str) -> AuthResult<Option<AuthContext>>;
}
