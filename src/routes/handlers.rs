use crate::error::{AppError, AppResult};
use crate::models::{GenerateUrlRequest, GenerateUrlResponse};
use crate::services::{RandomConfig, UrlGenerator};
use axum::extract::State;
use axum::response::{IntoResponse, Json};
use std::sync::Arc;
use url::{form_urlencoded, Url as UrlParser};
use validator::Validate;

use super::AppState;

/// Generate a URL augmented with random query parameters
pub async fn generate_url(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateUrlRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::InvalidUrl(format!("Validation failed: {}", e)))?;

    // Proper URL validation is opt-in; the generator itself accepts any input
    if state.strict_url_validation {
        UrlParser::parse(&payload.url)
            .map_err(|_| AppError::InvalidUrl("Invalid URL format".to_string()))?;

        if !payload.url.starts_with("http://") && !payload.url.starts_with("https://") {
            return Err(AppError::InvalidUrl(
                "URL must start with http:// or https://".to_string(),
            ));
        }
    }

    // Use per-request options or fall back to the server defaults
    let options = payload
        .options
        .unwrap_or_else(|| state.default_options.clone());
    let config = RandomConfig::new(&options);

    let generator = UrlGenerator::new(&payload.url, config);
    let generated_url = generator.generate();

    let param_count = count_query_params(&generated_url);
    let random_param_count = param_count - generator.parameters().len();

    let response = GenerateUrlResponse {
        base_url: generator.base_url().to_string(),
        generated_url,
        param_count,
        random_param_count,
    };

    Ok(Json(response))
}

/// Count the key/value pairs in the query portion of a URL.
fn count_query_params(url: &str) -> usize {
    match url.split_once('?') {
        Some((_, query)) => form_urlencoded::parse(query.as_bytes()).count(),
        None => 0,
    }
}
