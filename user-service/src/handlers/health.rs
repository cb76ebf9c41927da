//! Health endpoints.
//!
//! Both are contractually static: fixed payload, no dependency probes,
//! no side effects.

use axum::Json;

/// Service liveness check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running"),
    ),
    tag = "Observability"
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "server running" }))
}

/// Secondary liveness check
#[utoipa::path(
    get,
    path = "/health1",
    responses(
        (status = 200, description = "Service is running"),
    ),
    tag = "Observability"
)]
pub async fn health1() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "server running nicely" }))
}
