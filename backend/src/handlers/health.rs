//! Health check handlers

use axum::Json;
use shared::HealthResponse;

/// Health check endpoint handler
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        service: "weather-mcp".to_string(),
    })
}
