//! Route definitions for the Vila Rica HTTP API.
//!
//! Routes are organized by domain and mounted under `/api`. The mobile
//! client historically calls `/login`, `/recover`, `/verify-code` and
//! `/reset` at the root, so those paths stay mounted as top-level
//! aliases of the `/api` routes.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(recovery_routes())
        .merge(notice_routes())
        .merge(user_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .merge(legacy_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, registration
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
}

/// Password recovery endpoints: issue, verify, reset
fn recovery_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/recover", post(handlers::recovery::recover))
        .route("/auth/verify-code", post(handlers::recovery::verify_code))
        .route("/auth/reset", post(handlers::recovery::reset))
}

/// Notice registry and comment threads
fn notice_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notices",
            get(handlers::notice::list).post(handlers::notice::create),
        )
        .route(
            "/notices/{id}",
            get(handlers::notice::get).put(handlers::notice::update_status),
        )
        .route(
            "/notices/{id}/comments",
            get(handlers::comment::list).post(handlers::comment::create),
        )
        .route(
            "/notices/{id}/comments/{comment_id}/reply",
            post(handlers::comment::reply),
        )
}

/// Resident directory
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", get(handlers::user::list))
}

/// Health probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Top-level aliases kept for older client builds.
fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        .route("/recover", post(handlers::recovery::recover))
        .route("/verify-code", post(handlers::recovery::verify_code))
        .route("/reset", post(handlers::recovery::reset))
}
