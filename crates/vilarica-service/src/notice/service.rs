//! Notice registry: manager-gated creation and lifecycle.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use vilarica_core::{AppError, AppResult};
use vilarica_database::repositories::notice::NoticeRepository;
use vilarica_entity::notice::{Audience, CreateNotice, Notice, NoticeStatus};

use crate::context::RequestContext;

/// Orchestrates notice creation, listing, and status updates.
pub struct NoticeService {
    notice_repo: Arc<NoticeRepository>,
}

impl NoticeService {
    /// Creates a new notice service.
    pub fn new(notice_repo: Arc<NoticeRepository>) -> Self {
        Self { notice_repo }
    }

    /// Create a notice. Manager role required.
    ///
    /// The audience rules are enforced here even though the client also
    /// checks them: the list must be non-empty and `Todos` exclusive.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        title: String,
        description: Option<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        audiences: Vec<Audience>,
    ) -> AppResult<Notice> {
        if !ctx.is_manager() {
            return Err(AppError::forbidden("Only a manager can create notices"));
        }
        if title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }

        Audience::validate_set(&audiences)?;

        let notice = self
            .notice_repo
            .create(&CreateNotice {
                title,
                description,
                start_date,
                end_date,
                audiences,
                created_by: ctx.account_id,
            })
            .await?;

        info!(notice_id = %notice.id, created_by = %ctx.account_id, "Notice created");
        Ok(notice)
    }

    /// List all notices, newest first.
    ///
    /// Title/date/status filtering stays a read-side concern of the
    /// client, applied over the full set; there is no pagination.
    pub async fn list(&self, _ctx: &RequestContext) -> AppResult<Vec<Notice>> {
        self.notice_repo.find_all().await
    }

    /// Fetch one notice by id.
    pub async fn get(&self, _ctx: &RequestContext, id: Uuid) -> AppResult<Notice> {
        self.notice_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Notice not found"))
    }

    /// Update a notice's status. Manager role required.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        status: NoticeStatus,
    ) -> AppResult<Notice> {
        if !ctx.is_manager() {
            return Err(AppError::forbidden(
                "Only a manager can change a notice's status",
            ));
        }

        let notice = self
            .notice_repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Notice not found"))?;

        info!(notice_id = %notice.id, status = %notice.status, "Notice status updated");
        Ok(notice)
    }
}
