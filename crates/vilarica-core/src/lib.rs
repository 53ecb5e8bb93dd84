//! # vilarica-core
//!
//! Configuration schemas, error types, and the shared result alias for the
//! Vila Rica condominium backend.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
