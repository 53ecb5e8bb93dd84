//! Comment thread repository implementation.
//!
//! Comments and replies are append-only inserts; there are no update or
//! delete paths. Author names are denormalized from `accounts` at read
//! time via a join.

use sqlx::PgPool;
use uuid::Uuid;

use vilarica_core::error::{AppError, ErrorKind};
use vilarica_core::result::AppResult;
use vilarica_entity::comment::{Comment, CommentRow, Reply};

/// Repository for comment and reply persistence.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new comment on a notice and return it (with no replies).
    pub async fn create_comment(
        &self,
        notice_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> AppResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            WITH inserted AS (
                INSERT INTO comments (id, notice_id, author_id, text)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT i.id, i.notice_id, i.author_id, a.name AS author_name,
                   i.text, i.created_at
            FROM inserted i
            JOIN accounts a ON a.id = i.author_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(notice_id)
        .bind(author_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create comment", e))?;

        Ok(row.with_replies(Vec::new()))
    }

    /// Find a comment by id, scoped to a notice.
    ///
    /// Reply ids never match here, which is what caps the thread depth:
    /// replying to a reply id resolves to "comment not found".
    pub async fn find_comment_in_notice(
        &self,
        notice_id: Uuid,
        comment_id: Uuid,
    ) -> AppResult<Option<CommentRow>> {
        sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.notice_id, c.author_id, a.name AS author_name,
                   c.text, c.created_at
            FROM comments c
            JOIN accounts a ON a.id = c.author_id
            WHERE c.id = $1 AND c.notice_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(notice_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find comment", e))
    }

    /// Insert a new reply to a comment and return it.
    pub async fn create_reply(
        &self,
        comment_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> AppResult<Reply> {
        sqlx::query_as::<_, Reply>(
            r#"
            WITH inserted AS (
                INSERT INTO comment_replies (id, comment_id, author_id, text)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT i.id, i.comment_id, i.author_id, a.name AS author_name,
                   i.text, i.created_at
            FROM inserted i
            JOIN accounts a ON a.id = i.author_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(comment_id)
        .bind(author_id)
        .bind(text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reply", e))
    }

    /// List a notice's comments in creation order, each with its replies
    /// in creation order.
    pub async fn find_by_notice(&self, notice_id: Uuid) -> AppResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.id, c.notice_id, c.author_id, a.name AS author_name,
                   c.text, c.created_at
            FROM comments c
            JOIN accounts a ON a.id = c.author_id
            WHERE c.notice_id = $1
            ORDER BY c.created_at, c.id
            "#,
        )
        .bind(notice_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))?;

        let replies = sqlx::query_as::<_, Reply>(
            r#"
            SELECT r.id, r.comment_id, r.author_id, a.name AS author_name,
                   r.text, r.created_at
            FROM comment_replies r
            JOIN accounts a ON a.id = r.author_id
            JOIN comments c ON c.id = r.comment_id
            WHERE c.notice_id = $1
            ORDER BY r.created_at, r.id
            "#,
        )
        .bind(notice_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list replies", e))?;

        let mut comments: Vec<Comment> = rows
            .into_iter()
            .map(|row| row.with_replies(Vec::new()))
            .collect();

        for reply in replies {
            if let Some(comment) = comments.iter_mut().find(|c| c.id == reply.comment_id) {
                comment.replies.push(reply);
            }
        }

        Ok(comments)
    }
}
