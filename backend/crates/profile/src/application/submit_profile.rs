//! Submit Profile Use Case
//!
//! Orchestrates: verify session -> validate input -> upsert profile row
//! -> return a typed result. Every failure folds into the result object;
//! the caller always gets something renderable back.

use std::sync::Arc;

use auth::SessionVerifier;

use crate::domain::entity::Profile;
use crate::domain::form::{
    FieldErrors, ProfileForm, ProfileFormData, RawProfileForm, Submission, non_field_error,
};
use crate::domain::repository::ProfileRepository;

/// Non-field message when no session is present
pub const MSG_AUTH_REQUIRED: &str = "認証が必要です。ログインしてください。";

/// Non-field message when persistence fails
pub const MSG_SAVE_FAILED: &str = "プロフィールの保存に失敗しました。";

/// Success message
pub const MSG_SAVE_SUCCESS: &str = "プロフィールを保存しました！";

/// Submission outcome, mirrored 1:1 by the response DTO
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Exactly one upsert happened; `value` echoes the persisted fields
    Saved {
        message: String,
        value: ProfileFormData,
    },
    /// Nothing was persisted
    Rejected { errors: FieldErrors },
}

impl SubmitOutcome {
    fn rejected(errors: FieldErrors) -> Self {
        SubmitOutcome::Rejected { errors }
    }
}

/// Submit profile use case
pub struct SubmitProfileUseCase<R, V>
where
    R: ProfileRepository,
    V: SessionVerifier,
{
    repo: Arc<R>,
    verifier: Arc<V>,
}

impl<R, V> SubmitProfileUseCase<R, V>
where
    R: ProfileRepository,
    V: SessionVerifier,
{
    pub fn new(repo: Arc<R>, verifier: Arc<V>) -> Self {
        Self { repo, verifier }
    }

    pub async fn execute(&self, cookie_header: &str, raw: &RawProfileForm) -> SubmitOutcome {
        // 1. Verify session. A failed lookup cannot establish identity,
        //    so it takes the same path as a missing session.
        let ctx = match self.verifier.verify(cookie_header).await {
            Ok(Some(ctx)) => ctx,
            Ok(None) => {
                return SubmitOutcome::rejected(non_field_error(MSG_AUTH_REQUIRED));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed during profile submission");
                return SubmitOutcome::rejected(non_field_error(MSG_AUTH_REQUIRED));
            }
        };

        // 2. Validate. Errors are returned unchanged, with no side effects.
        let data = match ProfileForm::parse(raw) {
            Submission::Success(data) => data,
            Submission::Error(errors) => return SubmitOutcome::rejected(errors),
        };

        // 3. Upsert: update the existing row in place, or insert a new
        //    one with a fresh identifier.
        let user_id = ctx.user_id();

        let existing = match self.repo.find_by_user_id(user_id).await {
            Ok(existing) => existing,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load profile");
                return SubmitOutcome::rejected(non_field_error(MSG_SAVE_FAILED));
            }
        };

        let created = existing.is_none();
        let profile = match existing {
            Some(mut profile) => {
                profile.apply(&data);
                profile
            }
            None => Profile::new(user_id, &data),
        };

        if let Err(e) = self.repo.upsert(&profile).await {
            tracing::error!(error = %e, "Failed to persist profile");
            return SubmitOutcome::rejected(non_field_error(MSG_SAVE_FAILED));
        }

        tracing::info!(user_id = %user_id, created, "Profile saved");

        // 4. Echo the persisted fields back.
        SubmitOutcome::Saved {
            message: MSG_SAVE_SUCCESS.to_string(),
            value: data,
        }
    }
}
