//! HTTP handler definitions

use axum::{Json, extract::State};
use tracing::{debug, info};

use crate::config::SERVICE_NAME;
use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthStatus, RootStatus, utc_timestamp};

use super::state::AppState;

/// POST /analyze endpoint
///
/// Computes word and character counts for the submitted text.
///
/// # Request Body
/// ```json
/// { "text": "text to analyze" }
/// ```
///
/// # Response
/// - 200 OK: analysis succeeded
/// - 400 Bad Request: input error (empty text, text length exceeded)
/// - 422 Unprocessable Entity: missing or wrong-typed `text` field
/// - 500 Internal Server Error: internal error
pub async fn post_analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  info!(text_chars = request.text.chars().count(), "analyzing text");

  let response = state.service.analyze(request)?;

  info!(
    word_count = response.word_count,
    character_count = response.character_count,
    "analysis complete"
  );

  Ok(Json(response))
}

/// GET / endpoint (liveness)
///
/// Identifies the service and confirms it is up.
pub async fn get_root() -> Json<RootStatus> {
  debug!("liveness probe");

  Json(RootStatus {
    status: "healthy",
    service: SERVICE_NAME,
    timestamp: utc_timestamp(),
  })
}

/// GET /health endpoint (readiness)
///
/// Minimal fixed payload for orchestration probes.
pub async fn get_health() -> Json<HealthStatus> {
  Json(HealthStatus { status: "ok" })
}
