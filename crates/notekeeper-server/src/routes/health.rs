//! Liveness endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Root greeting, kept for clients that probe `/`.
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub data: &'static str,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
}

/// GET /
async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse { data: "hello" })
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        let response = health_check().await;
        assert_eq!(response.status, "ok");
    }

    #[tokio::test]
    async fn test_hello() {
        let response = hello().await;
        assert_eq!(serde_json::to_value(&response.0).unwrap()["data"], "hello");
    }
}
