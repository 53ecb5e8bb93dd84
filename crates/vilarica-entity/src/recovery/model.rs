//! Recovery code token record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An outstanding password-recovery code bound to one account.
///
/// The account id is the primary key, so each account holds at most one
/// outstanding code; re-issuing supersedes the previous one. The code is
/// consumed (deleted) by a successful password reset and becomes useless
/// once `expires_at` has passed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecoveryCode {
    /// The account this code belongs to.
    pub account_id: Uuid,
    /// The alphanumeric code, compared case-sensitively.
    pub code: String,
    /// When the code was issued.
    pub issued_at: DateTime<Utc>,
    /// When the code stops being accepted.
    pub expires_at: DateTime<Utc>,
}

impl RecoveryCode {
    /// Check whether the code is still within its validity window.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }

    /// Check a candidate against this code: exact match, not expired.
    ///
    /// No normalization is applied; `"ABC123"` does not match `"abc123"`.
    pub fn matches(&self, candidate: &str) -> bool {
        !self.is_expired() && self.code == candidate
    }
}
