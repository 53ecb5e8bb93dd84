//! Authentication, credential policy, and recovery-code configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Session token TTL in minutes.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// Recovery code length (alphanumeric characters).
    #[serde(default = "default_code_length")]
    pub recovery_code_length: usize,
    /// Recovery code validity window in minutes.
    #[serde(default = "default_code_ttl")]
    pub recovery_code_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: default_token_secret(),
            token_ttl_minutes: default_token_ttl(),
            password_min_length: default_password_min(),
            recovery_code_length: default_code_length(),
            recovery_code_ttl_minutes: default_code_ttl(),
        }
    }
}

fn default_token_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> u64 {
    12 * 60
}

fn default_password_min() -> usize {
    6
}

fn default_code_length() -> usize {
    6
}

fn default_code_ttl() -> u64 {
    15
}
