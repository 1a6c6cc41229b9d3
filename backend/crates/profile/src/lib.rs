//! Profile Backend Module
//!
//! The single user-editable record this system manages: one profile row
//! per authenticated identity, created on first form submission and
//! updated in place afterwards.
//!
//! Clean Architecture structure:
//! - `domain/` - entity, form schemas/validation, repository trait
//! - `application/` - submit/get use cases
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Invariants
//! - At most one profile per identity, enforced by the upsert logic
//!   (no database uniqueness constraint backs it up; see infra notes)
//! - Profiles are never deleted by this system

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::{GetProfileUseCase, SubmitOutcome, SubmitProfileUseCase};
pub use domain::entity::Profile;
pub use domain::form::{
    FieldErrors, Gender, ProfileForm, ProfileFormData, RawProfileForm, RawRegistrationForm,
    RegistrationForm, RegistrationFormData, Submission,
};
pub use domain::repository::ProfileRepository;
pub use error::{ProfileError, ProfileResult};
pub use infra::postgres::PgProfileRepository;
pub use presentation::router::profile_router;
