//! Resident directory.

pub mod service;

pub use service::DirectoryService;
