//! Domain Layer
//!
//! Identity and session data as issued by the external auth provider,
//! plus the verifier trait.

pub mod identity;
pub mod verifier;

// Re-exports
pub use identity::{AuthContext, Identity, SessionData};
pub use verifier::SessionVerifier;
