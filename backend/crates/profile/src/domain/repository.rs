//! Repository Trait
//!
//! Interface for profile persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::Profile;
use crate::error::ProfileResult;

/// Profile repository trait
///
/// No batching, no caching, no concurrency control: concurrent upserts
/// for the same identity are last-writer-wins.
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    /// Find the profile for an identity
    async fn find_by_user_id(&self, user_id: &str) -> ProfileResult<Option<Profile>>;

    /// Insert-if-absent, else update, keyed by `user_id`
    async fn upsert(&self, profile: &Profile) -> ProfileResult<()>;
}
