//! Notice handlers — create, list, fetch, status lifecycle.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use vilarica_core::error::AppError;
use vilarica_entity::notice::NoticeStatus;

use crate::dto::request::{CreateNoticeRequest, UpdateNoticeStatusRequest};
use crate::dto::response::{ApiResponse, NoticePayload, NoticesPayload};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/notices
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateNoticeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<NoticePayload>>), ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Title and start date are required"))?;
    let start_date = req
        .start_date
        .ok_or_else(|| AppError::validation("Start date is required"))?;

    let notice = state
        .notice_service
        .create(
            auth.context(),
            req.title,
            req.description,
            start_date,
            req.end_date,
            req.referentes,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(NoticePayload { notice })),
    ))
}

/// GET /api/notices
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<NoticesPayload>>, ApiError> {
    let notices = state.notice_service.list(auth.context()).await?;
    Ok(Json(ApiResponse::ok(NoticesPayload { notices })))
}

/// GET /api/notices/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<NoticePayload>>, ApiError> {
    let notice = state.notice_service.get(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok(NoticePayload { notice })))
}

/// PUT /api/notices/{id}
pub async fn update_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateNoticeStatusRequest>,
) -> Result<Json<ApiResponse<NoticePayload>>, ApiError> {
    let status = NoticeStatus::from_str(&req.status)?;

    let notice = state
        .notice_service
        .update_status(auth.context(), id, status)
        .await?;

    Ok(Json(ApiResponse::ok(NoticePayload { notice })))
}
