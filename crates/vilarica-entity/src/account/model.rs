//! Account entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::AccountRole;

/// A registered resident or manager account.
///
/// The email is the natural key and is stored and compared exactly as
/// given (case-sensitive).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Email address, unique across all accounts.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account role.
    pub role: AccountRole,
    /// Block number within the condominium.
    pub bloco: Option<String>,
    /// Apartment/unit number.
    pub apartamento: Option<String>,
    /// Relationship to the unit (owner, tenant, ...).
    pub relacao: Option<String>,
    /// Brazilian individual taxpayer registry number.
    pub cpf: Option<String>,
    /// Contact phone number.
    pub telefone: Option<String>,
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check if this account holds the manager role.
    pub fn is_manager(&self) -> bool {
        self.role.is_manager()
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Email address (unique).
    pub email: String,
    /// Display name.
    pub name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: AccountRole,
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
    /// Date of birth.
    pub birth_date: Option<NaiveDate>,
}
