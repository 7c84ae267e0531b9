//! API state definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::AnalyzeService;

/// Application state
///
/// State shared across the entire server.
/// Contains configuration and service.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Text analysis service
  ///
  /// - Production: `Arc::new(AnalyzeServiceFull::new())`
  /// - Test: `Arc::new(StubAnalyzeService)`
  pub service: Arc<dyn AnalyzeService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AnalyzeService>) -> Self {
    Self { config, service }
  }
}
