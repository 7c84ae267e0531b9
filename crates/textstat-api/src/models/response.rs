//! Response model definitions

use chrono::Utc;
use serde::Serialize;

/// Timestamp format: ISO-8601 UTC with microseconds and a trailing Z
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Text analysis response
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
  /// Verbatim echo of the input text (no trimming)
  pub original_text: String,
  /// Number of whitespace-separated words in the text
  pub word_count: usize,
  /// Number of Unicode code points in the text
  pub character_count: usize,
  /// UTC instant the analysis was performed, ISO-8601 with trailing Z
  pub analysis_timestamp: String,
}

/// Liveness payload returned by `GET /`
#[derive(Debug, Serialize)]
pub struct RootStatus {
  /// Fixed "healthy" marker
  pub status: &'static str,
  /// Service name
  pub service: &'static str,
  /// Current UTC instant, ISO-8601 with trailing Z
  pub timestamp: String,
}

/// Readiness payload returned by `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthStatus {
  /// Fixed "ok" marker
  pub status: &'static str,
}

/// Returns the current UTC instant as an ISO-8601 string ending in `Z`
#[must_use]
pub fn utc_timestamp() -> String {
  Utc::now().format(TIMESTAMP_FORMAT).to_string()
}
