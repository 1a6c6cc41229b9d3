//! Application Layer
//!
//! Use cases orchestrating session verification, validation and
//! persistence.

pub mod get_profile;
pub mod submit_profile;

// Re-exports
pub use get_profile::GetProfileUseCase;
pub use submit_profile::{SubmitOutcome, SubmitProfileUseCase};
