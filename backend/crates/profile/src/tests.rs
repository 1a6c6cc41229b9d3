//! Use-case and router tests for the profile crate
//!
//! Backed by an in-memory repository and a stub session verifier so the
//! orchestration (verify -> validate -> upsert -> result) is exercised
//! without Postgres or the auth provider.

use std::sync::{Arc, Mutex};

use auth::{AuthContext, AuthError, AuthResult, Identity, SessionData, SessionVerifier};
use chrono::{Duration, NaiveDate, Utc};

use crate::application::submit_profile::{
    MSG_AUTH_REQUIRED, MSG_SAVE_FAILED, MSG_SAVE_SUCCESS,
};
use crate::application::{GetProfileUseCase, SubmitOutcome, SubmitProfileUseCase};
use crate::domain::entity::Profile;
use crate::domain::form::{Gender, RawProfileForm};
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

// ============================================================================
// Test doubles
// ============================================================================

/// In-memory repository with the same last-writer-wins semantics as the
/// Postgres implementation
#[derive(Clone, Default)]
struct MemoryProfileRepository {
    rows: Arc<Mutex<Vec<Profile>>>,
}

impl MemoryProfileRepository {
    fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

impl ProfileRepository for MemoryProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> ProfileResult<Option<Profile>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn upsert(&self, profile: &Profile) -> ProfileResult<()> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.user_id == profile.user_id) {
            Some(existing) => *existing = profile.clone(),
            None => rows.push(profile.clone()),
        }
        Ok(())
    }
}

/// Repository whose writes always fail
#[derive(Clone)]
struct FailingProfileRepository;

impl ProfileRepository for FailingProfileRepository {
    async fn find_by_user_id(&self, _user_id: &str) -> ProfileResult<Option<Profile>> {
        Ok(None)
    }

    async fn upsert(&self, _profile: &Profile) -> ProfileResult<()> {
        Err(ProfileError::Internal("store is down".to_string()))
    }
}

/// Verifier answering with a fixed session state
#[derive(Clone)]
struct StubVerifier {
    ctx: Option<AuthContext>,
}

impl StubVerifier {
    fn authenticated(user_id: &str) -> Self {
        Self {
            ctx: Some(AuthContext {
                session: SessionData {
                    id: format!("sess_{user_id}"),
                    user_id: user_id.to_string(),
                    expires_at: Utc::now() + Duration::hours(12),
                },
                user: Identity {
                    id: user_id.to_string(),
                    email: format!("{user_id}@example.com"),
                    name: "テストユーザー".to_string(),
                    email_verified: true,
                    image: None,
                },
            }),
        }
    }

    fn anonymous() -> Self {
        Self { ctx: None }
    }
}

impl SessionVerifier for StubVerifier {
    async fn verify(&self, _cookie_header: &str) -> AuthResult<Option<AuthContext>> {
        Ok(self.ctx.clone())
    }
}

/// Verifier whose lookup always fails
#[derive(Clone)]
struct FailingVerifier;

impl SessionVerifier for FailingVerifier {
    async fn verify(&self, _cookie_header: &str) -> AuthResult<Option<AuthContext>> {
        Err(AuthError::Internal("provider down".to_string()))
    }
}

fn valid_form() -> RawProfileForm {
    RawProfileForm {
        name: Some("山田太郎".to_string()),
        gender: Some("male".to_string()),
        birth_date: Some("1990-01-15".to_string()),
        note: Some("よろしくお願いします".to_string()),
    }
}

fn submit_use_case<R, V>(repo: &R, verifier: V) -> SubmitProfileUseCase<R, V>
where
    R: ProfileRepository + Clone,
    V: SessionVerifier,
{
    SubmitProfileUseCase::new(Arc::new(repo.clone()), Arc::new(verifier))
}

// ============================================================================
// Submit: validation
// ============================================================================

mod submit_validation {
    use super::*;

    #[tokio::test]
    async fn test_missing_name_rejected_without_persistence() {
        let repo = MemoryProfileRepository::default();
        let use_case = submit_use_case(&repo, StubVerifier::authenticated("user_1"));

        let raw = RawProfileForm {
            name: None,
            ..valid_form()
        };
        let outcome = use_case.execute("cookie", &raw).await;

        match outcome {
            SubmitOutcome::Rejected { errors } => {
                assert_eq!(errors["name"], vec!["名前は必須です"]);
            }
            SubmitOutcome::Saved { .. } => panic!("expected rejection"),
        }
        assert_eq!(repo.row_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_birth_date_rejected() {
        let repo = MemoryProfileRepository::default();
        let use_case = submit_use_case(&repo, StubVerifier::authenticated("user_1"));

        let raw = RawProfileForm {
            birth_date: Some("not-a-date".to_string()),
            ..valid_form()
        };
        let outcome = use_case.execute("cookie", &raw).await;

        assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
        assert_eq!(repo.row_count(), 0);
    }

    #[tokio::test]
    async fn test_oversized_note_rejected() {
        let repo = MemoryProfileRepository::default();
        let use_case = submit_use_case(&repo, StubVerifier::authenticated("user_1"));

        let raw = RawProfileForm {
            note: Some("x".repeat(501)),
            ..valid_form()
        };
        let outcome = use_case.execute("cookie", &raw).await;

        assert!(matches!(outcome, SubmitOutcome::Rejected { .. }));
        assert_eq!(repo.row_count(), 0);
    }
}

// ============================================================================
// Submit: authentication
// ============================================================================

mod submit_auth {
    use super::*;

    #[tokio::test]
    async fn test_no_session_yields_non_field_error() {
        let repo = MemoryProfileRepository::default();
        let use_case = submit_use_case(&repo, StubVerifier::anonymous());

        let outcome = use_case.execute("", &valid_form()).await;

        match outcome {
            SubmitOutcome::Rejected { errors } => {
                assert_eq!(errors[""], vec![MSG_AUTH_REQUIRED]);
            }
            SubmitOutcome::Saved { .. } => panic!("expected rejection"),
        }
        assert_eq!(repo.row_count(), 0);
    }

    #[tokio::test]
    async fn test_verifier_failure_treated_as_unauthenticated() {
        let repo = MemoryProfileRepository::default();
        let use_case = submit_use_case(&repo, FailingVerifier);

        let outcome = use_case.execute("cookie", &valid_form()).await;

        match outcome {
            SubmitOutcome::Rejected { errors } => {
                assert_eq!(errors[""], vec![MSG_AUTH_REQUIRED]);
            }
            SubmitOutcome::Saved { .. } => panic!("expected rejection"),
        }
    }
}

// ============================================================================
// Submit: persistence
// ============================================================================

mod submit_persistence {
    use super::*;

    #[tokio::test]
    async fn test_valid_submission_persists_and_echoes_fields() {
        let repo = MemoryProfileRepository::default();
        let use_case = submit_use_case(&repo, StubVerifier::authenticated("user_1"));

        let outcome = use_case.execute("cookie", &valid_form()).await;

        match outcome {
            SubmitOutcome::Saved { message, value } => {
                assert_eq!(message, MSG_SAVE_SUCCESS);
                assert_eq!(value.name, "山田太郎");
                assert_eq!(value.gender, Gender::Male);
                assert_eq!(
                    value.birth_date,
                    NaiveDate::from_ymd_opt(1990, 1, 15).unwrap()
                );
            }
            SubmitOutcome::Rejected { errors } => panic!("unexpected errors: {errors:?}"),
        }

        // A read for the same identity returns exactly the submitted fields
        let get = GetProfileUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(StubVerifier::authenticated("user_1")),
        );
        let stored = get.execute("cookie").await.unwrap().unwrap();
        assert_eq!(stored.name, "山田太郎");
        assert_eq!(stored.note.as_deref(), Some("よろしくお願いします"));
    }

    #[tokio::test]
    async fn test_second_submission_updates_in_place() {
        let repo = MemoryProfileRepository::default();
        let use_case = submit_use_case(&repo, StubVerifier::authenticated("user_1"));

        let first = use_case.execute("cookie", &valid_form()).await;
        assert!(matches!(first, SubmitOutcome::Saved { .. }));

        let second_form = RawProfileForm {
            name: Some("山田花子".to_string()),
            gender: Some("female".to_string()),
            birth_date: Some("1992-06-01".to_string()),
            note: None,
        };
        let second = use_case.execute("cookie", &second_form).await;
        assert!(matches!(second, SubmitOutcome::Saved { .. }));

        // One row, reflecting the second submission
        assert_eq!(repo.row_count(), 1);
        let stored = repo.find_by_user_id("user_1").await.unwrap().unwrap();
        assert_eq!(stored.name, "山田花子");
        assert_eq!(stored.gender, Gender::Female);
        assert_eq!(stored.note, None);
    }

    #[tokio::test]
    async fn test_distinct_identities_get_distinct_rows() {
        let repo = MemoryProfileRepository::default();

        let alice = submit_use_case(&repo, StubVerifier::authenticated("alice"));
        let bob = submit_use_case(&repo, StubVerifier::authenticated("bob"));

        alice.execute("cookie", &valid_form()).await;
        bob.execute("cookie", &valid_form()).await;

        assert_eq!(repo.row_count(), 2);
    }

    #[tokio::test]
    async fn test_persistence_failure_yields_generic_error() {
        let repo = FailingProfileRepository;
        let use_case = submit_use_case(&repo, StubVerifier::authenticated("user_1"));

        let outcome = use_case.execute("cookie", &valid_form()).await;

        match outcome {
            SubmitOutcome::Rejected { errors } => {
                // The underlying cause stays server-side
                assert_eq!(errors[""], vec![MSG_SAVE_FAILED]);
            }
            SubmitOutcome::Saved { .. } => panic!("expected rejection"),
        }
    }
}

// ============================================================================
// Get profile
// ============================================================================

mod get_profile {
    use super::*;

    #[tokio::test]
    async fn test_unauthenticated_read_is_rejected() {
        let repo = MemoryProfileRepository::default();
        let use_case = GetProfileUseCase::new(
            Arc::new(repo),
            Arc::new(StubVerifier::anonymous()),
        );

        let result = use_case.execute("").await;
        assert!(matches!(result, Err(ProfileError::AuthRequired)));
    }

    #[tokio::test]
    async fn test_read_before_first_submission_is_none() {
        let repo = MemoryProfileRepository::default();
        let use_case = GetProfileUseCase::new(
            Arc::new(repo),
            Arc::new(StubVerifier::authenticated("user_1")),
        );

        let result = use_case.execute("cookie").await.unwrap();
        assert!(result.is_none());
    }
}

// ============================================================================
// Router
// ============================================================================

mod router {
    use super::*;
    use crate::presentation::router::profile_router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    async fn post_form(
        repo: MemoryProfileRepository,
        verifier: StubVerifier,
        body: &str,
    ) -> (StatusCode, serde_json::Value) {
        let app = profile_router(repo, verifier);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(
                        header::CONTENT_TYPE,
                        "application/x-www-form-urlencoded",
                    )
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_post_valid_form() {
        let (status, json) = post_form(
            MemoryProfileRepository::default(),
            StubVerifier::authenticated("user_1"),
            "name=%E5%B1%B1%E7%94%B0%E5%A4%AA%E9%83%8E&gender=male&birthDate=1990-01-15",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "success");
        assert_eq!(json["value"]["birthDate"], "1990-01-15");
    }

    #[tokio::test]
    async fn test_post_invalid_form_returns_error_map() {
        let (status, json) = post_form(
            MemoryProfileRepository::default(),
            StubVerifier::authenticated("user_1"),
            "gender=male&birthDate=1990-01-15",
        )
        .await;

        // Form protocol errors ride on a 200
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"]["name"][0], "名前は必須です");
    }

    #[tokio::test]
    async fn test_get_without_session_is_401() {
        let app = profile_router(
            MemoryProfileRepository::default(),
            StubVerifier::anonymous(),
        );
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
