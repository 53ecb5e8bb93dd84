//! Password recovery handlers — issue, verify, reset.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use vilarica_core::error::AppError;

use crate::dto::request::{RecoverRequest, ResetRequest, VerifyCodeRequest};
use crate::dto::response::{ApiResponse, MessagePayload};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /recover
pub async fn recover(
    State(state): State<AppState>,
    Json(req): Json<RecoverRequest>,
) -> Result<Json<ApiResponse<MessagePayload>>, ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email is required"))?;

    state.recovery_service.issue_code(&req.email).await?;

    Ok(Json(ApiResponse::ok(MessagePayload::new(
        "Recovery code sent",
    ))))
}

/// POST /verify-code
pub async fn verify_code(
    State(state): State<AppState>,
    Json(req): Json<VerifyCodeRequest>,
) -> Result<Json<ApiResponse<MessagePayload>>, ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email and code are required"))?;

    state
        .recovery_service
        .verify_code(&req.email, &req.code)
        .await?;

    Ok(Json(ApiResponse::ok(MessagePayload::new("Code verified"))))
}

/// POST /reset
pub async fn reset(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> Result<Json<ApiResponse<MessagePayload>>, ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email, code and new password are required"))?;

    state
        .recovery_service
        .reset_password(&req.email, &req.code, &req.new_password)
        .await?;

    Ok(Json(ApiResponse::ok(MessagePayload::new(
        "Password updated",
    ))))
}
