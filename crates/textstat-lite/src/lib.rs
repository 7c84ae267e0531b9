//! textstat-lite crate
//!
//! Lenient variant of the text analysis server: no validation, no
//! error taxonomy, no timestamps. Missing or malformed input degrades
//! to the empty string and every well-formed request gets a 200.
//!
//! ## Endpoints
//! - `POST /analyze` - Text Analysis (body optional)
//! - `GET /healthz` - Health Check (plain text `ok`)

use axum::{
  Json, Router,
  body::Bytes,
  routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::debug;

use textstat::measure;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Analysis request (every part optional)
#[derive(Debug, Default, Deserialize)]
pub struct LiteRequest {
  /// Text to analyze; defaults to the empty string when absent
  #[serde(default)]
  pub text: String,
}

/// Analysis response
#[derive(Debug, Serialize)]
pub struct LiteResponse {
  /// Verbatim echo of the input text
  pub original_text: String,
  /// Number of whitespace-separated words in the text
  pub word_count: usize,
  /// Number of Unicode code points in the text
  pub character_count: usize,
}

/// POST /analyze endpoint
///
/// The body is parsed leniently: an absent body, invalid JSON, a
/// missing `text` field, or a non-string `text` all count as the
/// empty string. This handler never fails.
pub async fn post_analyze(body: Bytes) -> Json<LiteResponse> {
  let text = serde_json::from_slice::<LiteRequest>(&body).map(|r| r.text).unwrap_or_default();

  debug!(text_chars = text.chars().count(), "analyzing text");

  let metrics = measure(&text);

  Json(LiteResponse {
    original_text: text,
    word_count: metrics.word_count,
    character_count: metrics.character_count,
  })
}

/// GET /healthz endpoint
pub async fn get_healthz() -> &'static str {
  "ok"
}

/// Creates the API router
#[must_use]
pub fn create_router() -> Router {
  Router::new()
    .route("/analyze", post(post_analyze))
    .route("/healthz", get(get_healthz))
    .layer(TraceLayer::new_for_http())
}

/// Resolves the bind address from the environment
///
/// `TEXTSTAT_LITE_BIND_ADDR` overrides the full address; `PORT`
/// overrides the port only. An unparseable `PORT` is ignored with a
/// warning, keeping the variant's always-succeed posture.
#[must_use]
pub fn bind_addr_from_env() -> String {
  if let Ok(bind_addr) = std::env::var("TEXTSTAT_LITE_BIND_ADDR") {
    return bind_addr;
  }

  match std::env::var("PORT") {
    Ok(port) => match port.parse::<u16>() {
      Ok(port) => format!("127.0.0.1:{}", port),
      Err(_) => {
        tracing::warn!(port = %port, "ignoring invalid PORT value");
        DEFAULT_BIND_ADDR.to_string()
      }
    },
    Err(_) => DEFAULT_BIND_ADDR.to_string(),
  }
}

/// Starts the server
///
/// # Errors
/// Returns an error if the listener cannot bind or the server fails
pub async fn run_server(bind_addr: &str) -> std::io::Result<()> {
  let listener = tokio::net::TcpListener::bind(bind_addr).await?;

  tracing::info!("starting server: http://{}", bind_addr);

  axum::serve(listener, create_router()).await
}
