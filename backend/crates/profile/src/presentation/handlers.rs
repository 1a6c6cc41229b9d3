//! HTTP Handlers

use axum::Json;
use axum::extract::{Form, State};
use axum::http::HeaderMap;
use std::sync::Arc;

use auth::SessionVerifier;
use platform::cookie::forwarded_cookie_header;

use crate::application::{GetProfileUseCase, SubmitProfileUseCase};
use crate::domain::form::ProfileFormData;
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;
use crate::presentation::dto::{FormActionResponse, ProfileFormRequest};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<R, V>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub verifier: Arc<V>,
}

/// POST /api/profile
///
/// Always answers 200 with the discriminated result object; validation
/// and auth failures are part of the form protocol, not HTTP errors.
pub async fn submit_profile<R, V>(
    State(state): State<ProfileAppState<R, V>>,
    headers: HeaderMap,
    Form(req): Form<ProfileFormRequest>,
) -> Json<FormActionResponse>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let cookie_header = forwarded_cookie_header(&headers);

    let use_case = SubmitProfileUseCase::new(state.repo.clone(), state.verifier.clone());

    let outcome = use_case.execute(&cookie_header, &req.into()).await;

    Json(outcome.into())
}

/// GET /api/profile
///
/// The caller's profile, or `null` when none exists yet; 401 problem
/// body without a session.
pub async fn get_profile<R, V>(
    State(state): State<ProfileAppState<R, V>>,
    headers: HeaderMap,
) -> ProfileResult<Json<Option<ProfileFormData>>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    V: SessionVerifier + Clone + Send + Sync + 'static,
{
    let cookie_header = forwarded_cookie_header(&headers);

    let use_case = GetProfileUseCase::new(state.repo.clone(), state.verifier.clone());

    let profile = use_case.execute(&cookie_header).await?;

    Ok(Json(profile))
}
