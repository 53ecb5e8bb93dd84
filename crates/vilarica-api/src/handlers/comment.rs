//! Comment handlers — threads under a notice, one level of replies.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use crate::dto::request::CommentRequest;
use crate::dto::response::{ApiResponse, CommentPayload, CommentsPayload, ReplyPayload};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/notices/{id}/comments
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notice_id): Path<Uuid>,
) -> Result<Json<ApiResponse<CommentsPayload>>, ApiError> {
    let comments = state.comment_service.list(auth.context(), notice_id).await?;
    Ok(Json(ApiResponse::ok(CommentsPayload { comments })))
}

/// POST /api/notices/{id}/comments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notice_id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CommentPayload>>), ApiError> {
    let comment = state
        .comment_service
        .add_comment(auth.context(), notice_id, &req.text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(CommentPayload { comment })),
    ))
}

/// POST /api/notices/{id}/comments/{comment_id}/reply
pub async fn reply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((notice_id, comment_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<CommentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReplyPayload>>), ApiError> {
    let reply = state
        .comment_service
        .add_reply(auth.context(), notice_id, comment_id, &req.text)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(ReplyPayload { reply })),
    ))
}
