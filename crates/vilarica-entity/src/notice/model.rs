//! Notice entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::audience::Audience;
use super::status::NoticeStatus;

/// A managed announcement visible to a targeted audience.
///
/// Serializes in the client's wire shape: camelCase keys with the
/// audience list under `referentes`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    /// Unique notice identifier.
    pub id: Uuid,
    /// Notice title.
    pub title: String,
    /// Optional long description.
    pub description: Option<String>,
    /// First day the notice applies.
    pub start_date: NaiveDate,
    /// Optional last day the notice applies.
    pub end_date: Option<NaiveDate>,
    /// Lifecycle status.
    pub status: NoticeStatus,
    /// Ordered audience references, stored as JSONB.
    #[sqlx(json)]
    #[serde(rename = "referentes")]
    pub audiences: Vec<Audience>,
    /// The manager account that created the notice.
    pub created_by: Uuid,
    /// When the notice was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new notice.
///
/// Status is not part of the input: new notices always start `active`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotice {
    /// Notice title (non-empty).
    pub title: String,
    /// Optional long description.
    pub description: Option<String>,
    /// First day the notice applies.
    pub start_date: NaiveDate,
    /// Optional last day the notice applies.
    pub end_date: Option<NaiveDate>,
    /// Audience references (non-empty, `Todos`-exclusive).
    pub audiences: Vec<Audience>,
    /// The creating manager's account id.
    pub created_by: Uuid,
}
