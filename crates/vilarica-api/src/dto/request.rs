//! Request DTOs with validation.
//!
//! Field names mirror the mobile client's JSON (camelCase, Portuguese
//! domain terms). Required string fields use `#[serde(default)]` so an
//! absent key deserializes to an empty string and fails validation with
//! a 400 instead of being rejected by serde with a 422.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use vilarica_entity::notice::Audience;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Account password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body, matching the client's register form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Account password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Block number.
    pub bloco: Option<String>,
    /// Apartment/unit number.
    pub apartamento: Option<String>,
    /// Relationship to the unit.
    pub relacao: Option<String>,
    /// CPF document number.
    pub cpf: Option<String>,
    /// Contact phone number.
    pub telefone: Option<String>,
    /// Date of birth (`dd/mm/yyyy` or ISO).
    pub birth_date: Option<String>,
    /// Requested role ("morador" or "sindico").
    #[serde(default)]
    #[validate(length(min = 1, message = "Access type is required"))]
    pub tipo_acesso: String,
}

/// Recovery-code issuance request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecoverRequest {
    /// Account email to send the code to.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
}

/// Recovery-code verification request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Account email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Candidate recovery code.
    #[serde(default)]
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
}

/// Password reset request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    /// Account email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Recovery code being consumed.
    #[serde(default)]
    #[validate(length(min = 1, message = "Code is required"))]
    pub code: String,
    /// New password (policy checked by the service).
    #[serde(default)]
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// Notice creation request body.
///
/// `created_at` is accepted for compatibility with the client payload
/// but ignored: the server assigns creation timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoticeRequest {
    /// Notice title.
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// First day the notice applies. Optional at the serde level so an
    /// absent key reports as a validation failure, not a body rejection.
    #[serde(default)]
    #[validate(required(message = "Start date is required"))]
    pub start_date: Option<NaiveDate>,
    /// Optional last day.
    pub end_date: Option<NaiveDate>,
    /// Audience references, in the client's `{type, value}` shape.
    #[serde(default)]
    pub referentes: Vec<Audience>,
    /// Client-side timestamp, ignored.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Notice status update request body.
///
/// Status arrives as a raw string and is parsed against the closed set
/// so an unknown value maps to `InvalidStatus` rather than a serde
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNoticeStatusRequest {
    /// New status value ("active" or "closed").
    #[serde(default)]
    pub status: String,
}

/// Comment or reply creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    /// Comment text.
    #[serde(default)]
    pub text: String,
}
