use crate::routes::types::HealthCheckResponse;
use axum::response::IntoResponse;
use axum::Json;

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    let response = HealthCheckResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    };

    Json(response)
}
