//! Router definitions

use axum::{
  Router,
  routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::handlers::{get_health, get_root, post_analyze};
use super::state::AppState;
use crate::errors::ApiError;

/// Creates the API router
///
/// # Arguments
/// * `state` - Application state
///
/// # Returns
/// Configured Router
pub fn create_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(get_root))
    .route("/health", get(get_health))
    .route("/analyze", post(post_analyze))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// Starts the server
///
/// # Arguments
/// * `state` - Application state
///
/// # Errors
/// Returns an error if the server fails to start
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = &state.config.bind_addr;
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .map_err(|e| ApiError::config(format!("Failed to bind: {}", e)))?;

  tracing::info!("starting server: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("Server error: {}", e)))?;

  Ok(())
}
