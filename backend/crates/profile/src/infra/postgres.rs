//! PostgreSQL Repository Implementation

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::ProfileId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::Profile;
use crate::domain::form::Gender;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// PostgreSQL-backed profile repository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn find_by_user_id(&self, user_id: &str) -> ProfileResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                id,
                user_id,
                name,
                gender,
                birth_date,
                note,
                created_at,
                updated_at
            FROM profile
            WHERE user_id = $1
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_profile()).transpose()
    }

    async fn upsert(&self, profile: &Profile) -> ProfileResult<()> {
        // Read-then-write keyed by user_id; nothing at the database level
        // enforces uniqueness, so two concurrent submissions for the same
        // identity can interleave (last writer wins).
        let updated = sqlx::query(
            r#"
            UPDATE profile SET
                name = $2,
                gender = $3,
                birth_date = $4,
                note = $5,
                updated_at = $6
            WHERE user_id = $1
            "#,
        )
        .bind(&profile.user_id)
        .bind(&profile.name)
        .bind(profile.gender.as_str())
        .bind(profile.birth_date)
        .bind(&profile.note)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if updated == 0 {
            sqlx::query(
                r#"
                INSERT INTO profile (
                    id,
                    user_id,
                    name,
                    gender,
                    birth_date,
                    note,
                    created_at,
                    updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(profile.id.as_uuid())
            .bind(&profile.user_id)
            .bind(&profile.name)
            .bind(profile.gender.as_str())
            .bind(profile.birth_date)
            .bind(&profile.note)
            .bind(profile.created_at)
            .bind(profile.updated_at)
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}

// ============================================================================
// Row mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    user_id: String,
    name: String,
    gender: String,
    birth_date: NaiveDate,
    note: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> ProfileResult<Profile> {
        let gender = Gender::parse(&self.gender).ok_or_else(|| {
            ProfileError::Internal(format!("Invalid gender value in store: {}", self.gender))
        })?;

        Ok(Profile {
            id: ProfileId::from_uuid(self.id),
            user_id: self.user_id,
            name: self.name,
            gender,
            birth_date: self.birth_date,
            note: self.note,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
