use crate::config::RateLimitConfig;
use crate::middleware::{request_id_middleware, ClientIpKeyExtractor};
use axum::middleware;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::health;
use super::AppState;

/// Create application router
pub fn create_router(
    state: Arc<AppState>,
    allowed_origins: Vec<String>,
    rate_limit_config: RateLimitConfig,
) -> axum::Router {
    // Configure rate limiting keyed by client IP
    let governor_layer = GovernorLayer::new(
        tower_governor::governor::GovernorConfigBuilder::default()
            .per_millisecond(60000 / rate_limit_config.requests_per_minute)
            .burst_size(rate_limit_config.burst_size)
            .key_extractor(ClientIpKeyExtractor)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Configure CORS with specific origins
    let cors = if allowed_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<http::HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| s.parse::<http::HeaderValue>().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Rate-limited generation endpoint
    let generate_routes = axum::Router::new()
        .route("/generate", post(handlers::generate_url))
        .layer(governor_layer);

    // Health check endpoint (no rate limiting)
    let health_routes = axum::Router::new().route("/_health", get(health::health_check));

    // Merge routers and apply middleware layers
    generate_routes
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
