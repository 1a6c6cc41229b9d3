//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::submit_profile::SubmitOutcome;
use crate::domain::form::{FieldErrors, ProfileFormData, RawProfileForm};

// ============================================================================
// Submit Profile
// ============================================================================

/// Form-encoded profile submission
///
/// Every field is an optional string; the validator decides what counts
/// as missing, so a partially filled browser form still deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileFormRequest {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub note: Option<String>,
}

impl From<ProfileFormRequest> for RawProfileForm {
    fn from(req: ProfileFormRequest) -> Self {
        RawProfileForm {
            name: req.name,
            gender: req.gender,
            birth_date: req.birth_date,
            note: req.note,
        }
    }
}

/// Discriminated submission result
///
/// `{"status":"success","message":...,"value":{...}}` or
/// `{"status":"error","error":{"field":["message",...]}}`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FormActionResponse {
    Success {
        message: String,
        value: ProfileFormData,
    },
    Error {
        error: FieldErrors,
    },
}

impl From<SubmitOutcome> for FormActionResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Saved { message, value } => {
                FormActionResponse::Success { message, value }
            }
            SubmitOutcome::Rejected { errors } => FormActionResponse::Error { error: errors },
        }
    }
}
