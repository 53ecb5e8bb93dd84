//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use vilarica_entity::account::AccountRole;

/// Context for the current authenticated request.
///
/// Extracted from the session token by the API layer and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated account's ID.
    pub account_id: Uuid,
    /// The account's role at the time the token was issued.
    pub role: AccountRole,
    /// The account's display name.
    pub name: String,
    /// The account's email.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(account_id: Uuid, role: AccountRole, name: String, email: String) -> Self {
        Self {
            account_id,
            role,
            name,
            email,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the caller holds the manager role.
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}
