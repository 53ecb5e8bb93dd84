//! Response DTOs.
//!
//! Every success body carries `ok: true` alongside the payload, the
//! envelope the mobile client keys its flows on.

use serde::Serialize;

use vilarica_entity::account::Account;
use vilarica_entity::comment::{Comment, Reply};
use vilarica_entity::notice::Notice;

/// Success envelope wrapping a payload with `ok: true`.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true` for successful responses.
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Payload with only a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    pub message: String,
}

impl MessagePayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Login payload: the session token plus the account it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: Account,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
    pub message: String,
    pub user: Account,
}

/// Resident directory payload.
#[derive(Debug, Clone, Serialize)]
pub struct UsersPayload {
    pub users: Vec<Account>,
}

/// Single notice payload.
#[derive(Debug, Clone, Serialize)]
pub struct NoticePayload {
    pub notice: Notice,
}

/// Notice listing payload.
#[derive(Debug, Clone, Serialize)]
pub struct NoticesPayload {
    pub notices: Vec<Notice>,
}

/// Single comment payload.
#[derive(Debug, Clone, Serialize)]
pub struct CommentPayload {
    pub comment: Comment,
}

/// Comment listing payload.
#[derive(Debug, Clone, Serialize)]
pub struct CommentsPayload {
    pub comments: Vec<Comment>,
}

/// Single reply payload.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyPayload {
    pub reply: Reply,
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthPayload {
    pub status: &'static str,
    pub database: &'static str,
    pub version: &'static str,
}
