//! # vilarica-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for all Vila Rica entities.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::{connect, health_check};
