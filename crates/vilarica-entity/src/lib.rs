//! # vilarica-entity
//!
//! Domain entity models for the Vila Rica condominium backend: accounts,
//! recovery codes, notices with audience targeting, and comment threads.

pub mod account;
pub mod comment;
pub mod notice;
pub mod recovery;
