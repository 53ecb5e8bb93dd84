//! Comment threads attached to notices.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use vilarica_core::{AppError, AppResult};
use vilarica_database::repositories::comment::CommentRepository;
use vilarica_database::repositories::notice::NoticeRepository;
use vilarica_entity::comment::{Comment, Reply};

use crate::context::RequestContext;

/// Orchestrates comment and reply appends and thread listing.
pub struct CommentService {
    comment_repo: Arc<CommentRepository>,
    notice_repo: Arc<NoticeRepository>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(comment_repo: Arc<CommentRepository>, notice_repo: Arc<NoticeRepository>) -> Self {
        Self {
            comment_repo,
            notice_repo,
        }
    }

    /// Append a comment to a notice.
    pub async fn add_comment(
        &self,
        ctx: &RequestContext,
        notice_id: Uuid,
        text: &str,
    ) -> AppResult<Comment> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Comment text is required"));
        }
        self.require_notice(notice_id).await?;

        let comment = self
            .comment_repo
            .create_comment(notice_id, ctx.account_id, text)
            .await?;

        info!(notice_id = %notice_id, comment_id = %comment.id, "Comment added");
        Ok(comment)
    }

    /// Append a reply to an existing comment on a notice.
    ///
    /// Reply ids are not addressable as comments, so targeting one fails
    /// with `NotFound` — thread depth stays at one.
    pub async fn add_reply(
        &self,
        ctx: &RequestContext,
        notice_id: Uuid,
        comment_id: Uuid,
        text: &str,
    ) -> AppResult<Reply> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::validation("Reply text is required"));
        }
        self.require_notice(notice_id).await?;

        self.comment_repo
            .find_comment_in_notice(notice_id, comment_id)
            .await?
            .ok_or_else(|| AppError::not_found("Comment not found"))?;

        let reply = self
            .comment_repo
            .create_reply(comment_id, ctx.account_id, text)
            .await?;

        info!(comment_id = %comment_id, reply_id = %reply.id, "Reply added");
        Ok(reply)
    }

    /// List a notice's thread in creation order.
    pub async fn list(&self, _ctx: &RequestContext, notice_id: Uuid) -> AppResult<Vec<Comment>> {
        self.require_notice(notice_id).await?;
        self.comment_repo.find_by_notice(notice_id).await
    }

    async fn require_notice(&self, notice_id: Uuid) -> AppResult<()> {
        if !self.notice_repo.exists(notice_id).await? {
            return Err(AppError::not_found("Notice not found"));
        }
        Ok(())
    }
}
