//! Form Schemas and Validation
//!
//! One explicit schema per form variant, each with a pure `parse`
//! function from the raw submitted field set to either a typed value or
//! a per-field error map. No reflection, no dynamic field binding.
//!
//! Submitted values arrive as optional strings (form encoding has no
//! types); an empty string counts as "not submitted", matching how the
//! browser submits untouched inputs.
//!
//! ## Rules
//! - `name`: required, 1-50 characters
//! - `gender`: required, enumerated (profile: male/female;
//!   registration: male/female/other)
//! - `birth_date` (profile): required, must parse as a calendar date
//! - `note` (profile): optional, at most 500 characters
//! - `email` (registration): required, valid syntax
//! - `terms` (registration): required, must be accepted

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for the name field (in characters)
pub const NAME_MAX_LENGTH: usize = 50;

/// Maximum length for the note field (in characters)
pub const NOTE_MAX_LENGTH: usize = 500;

/// Date format accepted for birth dates (ISO calendar date)
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

// User-facing validation messages
pub const MSG_NAME_REQUIRED: &str = "名前は必須です";
pub const MSG_NAME_TOO_LONG: &str = "名前は50文字以内で入力してください";
pub const MSG_EMAIL_REQUIRED: &str = "メールアドレスは必須です";
pub const MSG_EMAIL_INVALID: &str = "有効なメールアドレスを入力してください";
pub const MSG_GENDER_REQUIRED: &str = "性別を選択してください";
pub const MSG_TERMS_REQUIRED: &str = "利用規約への同意が必要です";
pub const MSG_BIRTH_DATE_REQUIRED: &str = "生年月日は必須です";
pub const MSG_BIRTH_DATE_INVALID: &str = "有効な日付を入力してください";
pub const MSG_NOTE_TOO_LONG: &str = "備考は500文字以内で入力してください";

// ============================================================================
// Shared types
// ============================================================================

/// Per-field error messages, keyed by field name.
///
/// The empty key `""` carries non-field errors (authentication,
/// persistence failures).
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Build a single non-field error map
pub fn non_field_error(message: impl Into<String>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(String::new(), vec![message.into()]);
    errors
}

/// Validation outcome: a typed value or the field-error map
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    Success(T),
    Error(FieldErrors),
}

impl<T> Submission<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Submission::Success(_))
    }
}

/// Enumerated gender value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Storage/wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    /// Parse from the submitted/stored string
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field helpers
// ============================================================================

/// Treat empty strings as absent (untouched form inputs submit "")
fn submitted(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn push_error(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.to_string());
}

/// Required string with a length cap, counted in characters
fn validate_bounded_text(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    max: usize,
    required_msg: &str,
    too_long_msg: &str,
) -> Option<String> {
    match submitted(value) {
        None => {
            push_error(errors, field, required_msg);
            None
        }
        Some(v) if v.chars().count() > max => {
            push_error(errors, field, too_long_msg);
            None
        }
        Some(v) => Some(v.to_string()),
    }
}

/// Basic email syntax validation (one `@`, non-empty local part of at
/// most 64 characters, dotted domain with a restricted charset)
fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') {
        return false;
    }
    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}

// ============================================================================
// Profile form variant
// ============================================================================

/// Raw submitted field set for the profile form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawProfileForm {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub note: Option<String>,
}

/// Validated profile form value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileFormData {
    pub name: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Profile form schema
pub struct ProfileForm;

impl ProfileForm {
    /// Validate a raw submission against the profile schema
    pub fn parse(raw: &RawProfileForm) -> Submission<ProfileFormData> {
        let mut errors = FieldErrors::new();

        let name = validate_bounded_text(
            &mut errors,
            "name",
            raw.name.as_deref(),
            NAME_MAX_LENGTH,
            MSG_NAME_REQUIRED,
            MSG_NAME_TOO_LONG,
        );

        // The profile form only offers male/female
        let gender = match submitted(raw.gender.as_deref()).and_then(Gender::parse) {
            Some(g @ (Gender::Male | Gender::Female)) => Some(g),
            _ => {
                push_error(&mut errors, "gender", MSG_GENDER_REQUIRED);
                None
            }
        };

        let birth_date = match submitted(raw.birth_date.as_deref()) {
            None => {
                push_error(&mut errors, "birthDate", MSG_BIRTH_DATE_REQUIRED);
                None
            }
            Some(v) => match NaiveDate::parse_from_str(v, BIRTH_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    push_error(&mut errors, "birthDate", MSG_BIRTH_DATE_INVALID);
                    None
                }
            },
        };

        // Optional; empty string normalized to absent
        let note = match submitted(raw.note.as_deref()) {
            None => None,
            Some(v) if v.chars().count() > NOTE_MAX_LENGTH => {
                push_error(&mut errors, "note", MSG_NOTE_TOO_LONG);
                None
            }
            Some(v) => Some(v.to_string()),
        };

        match (name, gender, birth_date) {
            (Some(name), Some(gender), Some(birth_date)) if errors.is_empty() => {
                Submission::Success(ProfileFormData {
                    name,
                    gender,
                    birth_date,
                    note,
                })
            }
            _ => Submission::Error(errors),
        }
    }
}

// ============================================================================
// Registration form variant
// ============================================================================

/// Raw submitted field set for the user registration form
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRegistrationForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub terms: Option<String>,
}

/// Validated registration form value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFormData {
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub terms: bool,
}

/// Registration form schema
pub struct RegistrationForm;

impl RegistrationForm {
    /// Validate a raw submission against the registration schema
    pub fn parse(raw: &RawRegistrationForm) -> Submission<RegistrationFormData> {
        let mut errors = FieldErrors::new();

        let name = validate_bounded_text(
            &mut errors,
            "name",
            raw.name.as_deref(),
            NAME_MAX_LENGTH,
            MSG_NAME_REQUIRED,
            MSG_NAME_TOO_LONG,
        );

        let email = match submitted(raw.email.as_deref()) {
            None => {
                push_error(&mut errors, "email", MSG_EMAIL_REQUIRED);
                None
            }
            Some(v) if !is_valid_email(v) => {
                push_error(&mut errors, "email", MSG_EMAIL_INVALID);
                None
            }
            Some(v) => Some(v.to_string()),
        };

        // Registration offers all three options
        let gender = match submitted(raw.gender.as_deref()).and_then(Gender::parse) {
            Some(g) => Some(g),
            None => {
                push_error(&mut errors, "gender", MSG_GENDER_REQUIRED);
                None
            }
        };

        // Checkboxes submit "on" when checked and nothing otherwise
        let terms = matches!(submitted(raw.terms.as_deref()), Some("on" | "true"));
        if !terms {
            push_error(&mut errors, "terms", MSG_TERMS_REQUIRED);
        }

        match (name, email, gender) {
            (Some(name), Some(email), Some(gender)) if errors.is_empty() => {
                Submission::Success(RegistrationFormData {
                    name,
                    email,
                    gender,
                    terms,
                })
            }
            _ => Submission::Error(errors),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
