//! Server startup and shutdown logic.
//!
//! This module contains the `run_server` function which handles:
//! - Application state creation
//! - Router creation
//! - Server binding and graceful shutdown

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes;
use crate::state;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Run the web server with the given configuration.
///
/// This function creates the application state, sets up the router, and
/// starts the server with graceful shutdown handling.
///
/// # Arguments
///
/// * `config` - The application configuration
/// * `addr` - The address to bind the server to (e.g., "127.0.0.1:3000")
///
/// # Errors
///
/// This function will return an error if:
/// - Server binding fails
/// - Server runtime error occurs
pub async fn run_server(config: Config, addr: String) -> AppResult<()> {
    info!("Starting randurl server...");

    let state = Arc::new(state::AppState {
        default_options: config.generator.as_options(),
        strict_url_validation: config.generator.strict_url_validation,
    });

    // Create router
    let app = routes::create_router(state, config.cors.allowed_origins, config.rate_limit);

    // Start server
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to address {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);

    // Set up graceful shutdown
    let shutdown_signal = create_shutdown_signal();

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| AppError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create a future that resolves when a shutdown signal is received.
///
/// On Unix-like systems, this listens for both Ctrl+C (SIGINT) and SIGTERM.
/// On other platforms, it only listens for Ctrl+C.
///
/// # Panics
///
/// Panics if signal handler installation fails. This is intentional because
/// signal handler failures are unrecoverable system-level errors that indicate
/// the OS cannot deliver shutdown signals, making graceful shutdown impossible.
async fn create_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    #[cfg(not(unix))]
    ctrl_c.await;
}
