//! Auth (Session Verification) Backend Module
//!
//! This system does not issue sessions. Signup, login and session
//! lifecycle are owned by an external auth provider; this crate only
//! reads session state and gates routes on it.
//!
//! Clean Architecture structure:
//! - `domain/` - identity/session data, verifier trait
//! - `application/` - route policy and gate configuration
//! - `infra/` - HTTP verifier against the provider's session endpoint
//! - `presentation/` - per-request route gate middleware
//!
//! ## Behavior
//! - Every request outside the `/api/auth` prefix (and static assets) is
//!   classified as protected, auth-only, or public
//! - Protected route without a session redirects to the login path
//! - Auth route with a session redirects to the dashboard path
//! - The cookie header is forwarded verbatim to the provider

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use application::route_policy::{RouteClass, RoutePolicy};
pub use domain::{AuthContext, Identity, SessionData, SessionVerifier};
pub use error::{AuthError, AuthResult};
pub use infra::http::HttpSessionVerifier;
pub use presentation::middleware::{RouteGateState, route_gate};
