//! Password recovery: issue, verify, reset.

pub mod service;

pub use service::RecoveryService;
