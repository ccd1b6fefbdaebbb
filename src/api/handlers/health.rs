//! Liveness probe.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    status: &'static str,
    message: &'static str,
    timestamp: String,
}

/// `GET /health` — reports that the process is up.
pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "OK",
        message: "Course Catalog API is running",
        timestamp: Utc::now().to_rfc3339(),
    })
}
