//! Notice repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use vilarica_core::error::{AppError, ErrorKind};
use vilarica_core::result::AppResult;
use vilarica_entity::notice::{CreateNotice, Notice, NoticeStatus};

/// Repository for notice persistence and lifecycle updates.
#[derive(Debug, Clone)]
pub struct NoticeRepository {
    pool: PgPool,
}

impl NoticeRepository {
    /// Create a new notice repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a notice by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Notice>> {
        sqlx::query_as::<_, Notice>("SELECT * FROM notices WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notice by id", e)
            })
    }

    /// List all notices, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Notice>> {
        sqlx::query_as::<_, Notice>("SELECT * FROM notices ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list notices", e))
    }

    /// Insert a new notice with status `active` and return the stored row.
    pub async fn create(&self, data: &CreateNotice) -> AppResult<Notice> {
        let audiences = serde_json::to_value(&data.audiences)?;

        sqlx::query_as::<_, Notice>(
            r#"
            INSERT INTO notices
                (id, title, description, start_date, end_date, status, audiences, created_by)
            VALUES ($1, $2, $3, $4, $5, 'active', $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(audiences)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notice", e))
    }

    /// Update a notice's status and return the updated row, or `None`
    /// when the id is unknown.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: NoticeStatus,
    ) -> AppResult<Option<Notice>> {
        sqlx::query_as::<_, Notice>(
            "UPDATE notices SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update notice status", e)
        })
    }

    /// Check whether a notice exists.
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM notices WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check notice existence", e)
            })
    }
}
