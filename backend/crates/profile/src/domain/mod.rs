//! Domain Layer
//!
//! Contains the profile entity, form schemas with validation, and the
//! repository trait.

pub mod entity;
pub mod form;
pub mod repository;

// Re-exports
pub use entity::Profile;
pub use form::{Gender, ProfileForm, ProfileFormData, RegistrationForm, Submission};
pub use repository::ProfileRepository;
