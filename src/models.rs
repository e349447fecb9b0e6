use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::RandomOptions;

/// Request to generate a URL with random parameters
#[derive(Debug, Deserialize, Validate)]
pub struct GenerateUrlRequest {
    #[validate(length(min = 1, message = "URL must not be empty"))]
    pub url: String,

    /// Per-request generation bounds; server defaults apply when omitted
    pub options: Option<RandomOptions>,
}

/// Response after generating a URL
#[derive(Debug, Serialize)]
pub struct GenerateUrlResponse {
    pub base_url: String,
    pub generated_url: String,
    pub param_count: usize,
    pub random_param_count: usize,
}
