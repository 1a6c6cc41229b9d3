//! Profile Entity
//!
//! One profile row per identity. Created on the first successful form
//! submission, updated in place afterwards, never deleted.

use chrono::{DateTime, NaiveDate, Utc};
use kernel::id::ProfileId;

use crate::domain::form::{Gender, ProfileFormData};

/// Profile entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Row identifier, generated on insert
    pub id: ProfileId,
    /// Opaque identity id from the auth provider; de facto unique key
    pub user_id: String,
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub note: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile from a validated submission
    pub fn new(user_id: impl Into<String>, data: &ProfileFormData) -> Self {
        let now = Utc::now();

        Self {
            id: ProfileId::new(),
            user_id: user_id.into(),
            name: data.name.clone(),
            gender: data.gender,
            birth_date: data.birth_date,
            note: data.note.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite all editable fields from a validated submission
    pub fn apply(&mut self, data: &ProfileFormData) {
        self.name = data.name.clone();
        self.gender = data.gender;
        self.birth_date = data.birth_date;
        self.note = data.note.clone();
        self.updated_at = Utc::now();
    }

    /// Form-shaped view of the stored fields
    pub fn to_form_data(&self) -> ProfileFormData {
        ProfileFormData {
            name: self.name.clone(),
            gender: self.gender,
            birth_date: self.birth_date,
            note: self.note.clone(),
        }
    }
}
