//! Resident directory handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, UsersPayload};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UsersPayload>>, ApiError> {
    let users = state.directory_service.list(auth.context()).await?;
    Ok(Json(ApiResponse::ok(UsersPayload { users })))
}
