//! Get Profile Use Case
//!
//! Session-gated read of the caller's own profile.

use std::sync::Arc;

use auth::SessionVerifier;

use crate::domain::form::ProfileFormData;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Get profile use case
pub struct GetProfileUseCase<R, V>
where
    R: ProfileRepository,
    V: SessionVerifier,
{
    repo: Arc<R>,
    verifier: Arc<V>,
}

impl<R, V> GetProfileUseCase<R, V>
where
    R: ProfileRepository,
    V: SessionVerifier,
{
    pub fn new(repo: Arc<R>, verifier: Arc<V>) -> Self {
        Self { repo, verifier }
    }

    /// Fetch the caller's profile; `None` when none exists yet
    pub async fn execute(&self, cookie_header: &str) -> ProfileResult<Option<ProfileFormData>> {
        let ctx = self
            .verifier
            .verify(cookie_header)
            .await?
            .ok_or(ProfileError::AuthRequired)?;

        let profile = self.repo.find_by_user_id(ctx.user_id()).await?;

        Ok(profile.map(|p| p.to_form_data()))
    }
}
