//! Comment thread models.
//!
//! Comments belong to exactly one notice and replies to exactly one
//! comment. Both are append-only and immutable once created; threading
//! depth is capped at one level, so replies are not addressable as
//! comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A top-level comment on a notice, with its replies in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The notice this comment is attached to.
    pub notice_id: Uuid,
    /// The commenting account.
    pub author_id: Uuid,
    /// Author display name, denormalized for the thread view.
    pub author_name: String,
    /// Comment body.
    pub text: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
    /// Replies in creation order.
    pub replies: Vec<Reply>,
}

/// Database row for a comment, before replies are attached.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    /// Unique comment identifier.
    pub id: Uuid,
    /// The notice this comment is attached to.
    pub notice_id: Uuid,
    /// The commenting account.
    pub author_id: Uuid,
    /// Author display name.
    pub author_name: String,
    /// Comment body.
    pub text: String,
    /// When the comment was created.
    pub created_at: DateTime<Utc>,
}

impl CommentRow {
    /// Attach replies to build the full thread entry.
    pub fn with_replies(self, replies: Vec<Reply>) -> Comment {
        Comment {
            id: self.id,
            notice_id: self.notice_id,
            author_id: self.author_id,
            author_name: self.author_name,
            text: self.text,
            created_at: self.created_at,
            replies,
        }
    }
}

/// A single-level reply to a comment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    /// Unique reply identifier.
    pub id: Uuid,
    /// The comment this reply belongs to.
    pub comment_id: Uuid,
    /// The replying account.
    pub author_id: Uuid,
    /// Author display name.
    pub author_name: String,
    /// Reply body.
    pub text: String,
    /// When the reply was created.
    pub created_at: DateTime<Utc>,
}
