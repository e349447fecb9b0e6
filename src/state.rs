use crate::services::RandomOptions;

/// Application state shared across all HTTP handlers.
///
/// This struct is wrapped in `Arc` and shared across all request handlers
/// via Axum's State extraction.
#[derive(Clone)]
pub struct AppState {
    /// Fallback generation bounds for requests that omit `options`
    pub default_options: RandomOptions,

    /// Whether submitted URLs must parse and use an http(s) scheme
    pub strict_url_validation: bool,
}
