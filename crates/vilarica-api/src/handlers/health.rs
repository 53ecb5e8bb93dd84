//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, HealthPayload};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthPayload>> {
    let database = match vilarica_database::health_check(&state.db_pool).await {
        Ok(()) => "connected",
        Err(_) => "unreachable",
    };

    Json(ApiResponse::ok(HealthPayload {
        status: "ok",
        database,
        version: env!("CARGO_PKG_VERSION"),
    }))
}
