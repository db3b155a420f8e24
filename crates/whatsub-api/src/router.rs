use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{reminder, state::ApiState, subscription, user};

/// Every API route plus health checks and the JSON 404 fallback.
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(user::routes())
        .merge(subscription::routes())
        .merge(reminder::routes())
        .fallback(handler_404)
}

/// Liveness: the process is up, the database is not consulted.
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy" }))
}

/// Readiness: the database answers.
async fn readiness(State(state): State<ApiState>) -> impl IntoResponse {
    match whatsub_db::ping(&state.pool).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable", "error": e.to_string() })),
        ),
    }
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "The requested resource was not found" })),
    )
}
