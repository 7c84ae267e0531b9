//! textstat-api server entry point

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use textstat_api::ApiError;
use textstat_api::AnalyzeServiceFull;
use textstat_api::api::AppState;
use textstat_api::api::run_server;
use textstat_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Initialize logging
  tracing_subscriber::registry().with(tracing_subscriber::fmt::layer()).init();

  // Load configuration
  let config = Config::from_env()?;
  tracing::info!(bind_addr = %config.bind_addr, "configuration loaded");

  // Initialize the service
  let service = Arc::new(AnalyzeServiceFull::new());
  tracing::info!("text analysis service initialized");

  // Create application state
  let state = AppState::new(config, service);

  // Start the server
  run_server(state).await
}
