//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness probe
//! - /health/live - Liveness probe

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

fn response(status: &str) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: status.to_string(),
        service: "colorfun-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    response("healthy")
}

/// Readiness probe - with in-memory stores there are no external
/// dependencies to check, so ready follows from running
pub async fn readiness_check() -> Json<HealthResponse> {
    response("ready")
}

/// Liveness probe - always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    response("alive")
}
