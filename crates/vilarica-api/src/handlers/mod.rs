//! Route handlers organized by domain.

pub mod auth;
pub mod comment;
pub mod health;
pub mod notice;
pub mod recovery;
pub mod user;
