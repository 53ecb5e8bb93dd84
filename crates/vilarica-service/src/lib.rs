//! # vilarica-service
//!
//! Business logic for the Vila Rica backend: authentication, the
//! password-recovery state machine, the notice registry, comment threads,
//! and the resident directory.

pub mod auth;
pub mod comment;
pub mod context;
pub mod directory;
pub mod notice;
pub mod recovery;

pub use context::RequestContext;
