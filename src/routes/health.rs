//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Point the pod's `livenessProbe.httpGet` at `/health`.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check handler.
///
/// This is a liveness probe: it only proves the process can answer HTTP.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
