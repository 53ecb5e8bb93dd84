//! Auth handlers — login and registration.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use vilarica_core::error::AppError;
use vilarica_service::auth::RegisterData;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, LoginPayload, RegisterPayload};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginPayload>>, ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email and password are required"))?;

    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginPayload {
        token: result.token,
        user: result.account,
    })))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisterPayload>>), ApiError> {
    req.validate()
        .map_err(|_| AppError::validation("Email, password, name and access type are required"))?;

    let account = state
        .auth_service
        .register(RegisterData {
            email: req.email,
            password: req.password,
            name: req.name,
            bloco: req.bloco,
            apartamento: req.apartamento,
            relacao: req.relacao,
            cpf: req.cpf,
            telefone: req.telefone,
            birth_date: req.birth_date,
            tipo_acesso: req.tipo_acesso,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(RegisterPayload {
            message: "Account created".to_string(),
            user: account,
        })),
    ))
}
