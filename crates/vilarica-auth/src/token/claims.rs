//! Session token claims.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vilarica_entity::account::AccountRole;

/// Claims payload embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account ID.
    pub sub: Uuid,
    /// Account role at the time of token issuance.
    pub role: AccountRole,
    /// Account display name for convenience.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the account ID from the subject claim.
    pub fn account_id(&self) -> Uuid {
        self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
