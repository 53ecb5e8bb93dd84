//! Comment threads.

pub mod service;

pub use service::CommentService;
