//! Notice lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use vilarica_core::AppError;

/// The lifecycle status of a notice.
///
/// The set is closed: any other submitted value is rejected with
/// `InvalidStatus` at the parse boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notice_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NoticeStatus {
    /// The notice is current and shown prominently.
    Active,
    /// The notice has been closed by a manager.
    Closed,
}

impl NoticeStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoticeStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "closed" => Ok(Self::Closed),
            _ => Err(AppError::invalid_status(format!(
                "Invalid notice status: '{s}'. Expected 'active' or 'closed'"
            ))),
        }
    }
}
