//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use vilarica_core::AppError;
use vilarica_core::config::AuthConfig;

use super::claims::Claims;

/// Decodes and validates signed session tokens.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for signature validation.
    decoding_key: DecodingKey,
    /// Validation rules (algorithm and expiry).
    validation: Validation,
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Decodes a token, verifying signature and expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::authentication(format!("Invalid session token: {e}")))
    }
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder").finish_non_exhaustive()
    }
}
