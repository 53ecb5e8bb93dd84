//! Credential policy enforcement for new passwords.

use vilarica_core::AppError;
use vilarica_core::config::AuthConfig;

/// Validates new passwords against the configured minimum length.
///
/// The reference client accepts any 6-character password, so length is
/// the whole policy; a violation surfaces as `WeakCredential`.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordPolicy {
    /// Creates a new policy from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a candidate password.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::weak_credential(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        Ok(())
    }
}
