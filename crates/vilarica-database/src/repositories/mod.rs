//! Concrete repository implementations, one per aggregate.

pub mod account;
pub mod comment;
pub mod notice;
pub mod recovery;
