//! Notice entity, lifecycle status, and audience targeting.

pub mod audience;
pub mod model;
pub mod status;

pub use audience::Audience;
pub use model::{CreateNotice, Notice};
pub use status::NoticeStatus;
