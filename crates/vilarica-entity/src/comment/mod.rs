//! Comment and reply entities.

pub mod model;

pub use model::{Comment, CommentRow, Reply};
