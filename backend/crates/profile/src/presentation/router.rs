//! Profile Router

use axum::{Router, routing::get};
use std::sync::Arc;

use auth::SessionVerifier;

use crate::domain::repository::ProfileRepository;
use crate::presentation::handlers::{self, ProfileAppState};

/// Create the profile router for any repository/verifier implementation
pub fn profile_router<R, V>(repo: R, verifier: V) -> Router
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let state = ProfileAppState {
        repo: Arc::new(repo),
        verifier: Arc::new(verifier),
    };

    Router::new()
        .route(
            "/",
            get(handlers::get_profile::<R, V>).post(handlers::submit_profile::<R, V>),
        )
        .with_state(state)
}
