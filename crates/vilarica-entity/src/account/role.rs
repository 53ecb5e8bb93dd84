//! Account role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use vilarica_core::AppError;

/// Roles available to condominium accounts.
///
/// The legacy client stores the role as free text ("morador", "síndico")
/// and normalizes it on every read. Here the role is a closed enum
/// validated once, at account creation; [`FromStr`] accepts the legacy
/// spellings (accent-stripped, lowercased) so existing clients keep
/// working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    /// A regular resident: can read notices and participate in threads.
    Resident,
    /// The condominium manager (síndico): can create notices and change
    /// their status.
    Manager,
}

impl AccountRole {
    /// Check if this role may create notices and mutate their lifecycle.
    pub fn is_manager(&self) -> bool {
        matches!(self, Self::Manager)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resident => "resident",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccountRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match strip_accents(s).to_lowercase().as_str() {
            "resident" | "morador" | "moradora" => Ok(Self::Resident),
            "manager" | "sindico" | "admin" => Ok(Self::Manager),
            _ => Err(AppError::validation(format!(
                "Invalid account role: '{s}'. Expected one of: resident, manager"
            ))),
        }
    }
}

/// Remove combining accents so "síndico" and "sindico" compare equal.
fn strip_accents(s: &str) -> String {
    s.chars()
        .filter_map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => Some('a'),
            'é' | 'ê' | 'É' | 'Ê' => Some('e'),
            'í' | 'Í' => Some('i'),
            'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => Some('o'),
            'ú' | 'Ú' => Some('u'),
            'ç' | 'Ç' => Some('c'),
            _ => Some(c),
        })
        .collect()
}
