//! # vilarica-auth
//!
//! Credential handling for the Vila Rica backend: Argon2id password
//! hashing and policy, recovery-code generation, and signed session
//! tokens.

pub mod password;
pub mod recovery;
pub mod token;

pub use password::{PasswordHasher, PasswordPolicy};
pub use recovery::CodeGenerator;
pub use token::{Claims, TokenDecoder, TokenEncoder};
