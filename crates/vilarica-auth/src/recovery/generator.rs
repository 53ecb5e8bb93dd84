//! Random alphanumeric recovery-code generation.

use rand::RngExt;

use vilarica_core::config::AuthConfig;

/// Alphabet for recovery codes. Mixed-case alphanumerics; codes are
/// compared case-sensitively downstream.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates short random codes for password recovery emails.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    /// Number of characters per code.
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            length: config.recovery_code_length,
        }
    }

    /// Creates a generator with an explicit length.
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }

    /// Generates a fresh code.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }
}
