//! API integration tests
//!
//! Verifies HTTP endpoint behavior through the Router. The production
//! service is cheap to construct, so most cases run against it; a stub
//! is only used to force internal faults.

use std::sync::Arc;

use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use textstat_api::{
  api::{AppState, create_router},
  config::Config,
  errors::{ApiError, Result as ApiResult},
  models::{AnalyzeRequest, AnalyzeResponse},
  service::{AnalyzeService, AnalyzeServiceFull},
};

/// Builds a Router backed by the production service
fn test_app() -> Router {
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
  };

  let service: Arc<dyn AnalyzeService> = Arc::new(AnalyzeServiceFull::new());
  let state = AppState::new(config, service);

  create_router(state)
}

/// Stub service that fails on every request
struct FaultyAnalyzeService;

impl AnalyzeService for FaultyAnalyzeService {
  fn analyze(&self, _request: AnalyzeRequest) -> ApiResult<AnalyzeResponse> {
    Err(ApiError::internal("metrics computation panicked"))
  }
}

/// Builds a Router backed by the always-failing stub
fn faulty_app() -> Router {
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
  };

  let service: Arc<dyn AnalyzeService> = Arc::new(FaultyAnalyzeService);
  let state = AppState::new(config, service);

  create_router(state)
}

/// Sends POST /analyze with the given JSON body string
async fn post_analyze_raw(app: Router, body: impl Into<Body>) -> axum::response::Response {
  app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/analyze")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap(),
    )
    .await
    .expect("request should succeed")
}

/// Sends POST /analyze with a `{"text": ...}` payload
async fn post_analyze(app: Router, text: &str) -> axum::response::Response {
  let payload = serde_json::json!({ "text": text });
  post_analyze_raw(app, payload.to_string()).await
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

// ============================================================================
// Health endpoints
// ============================================================================

#[tokio::test]
async fn root_returns_service_status() {
  let app = test_app();

  let response = app
    .oneshot(Request::builder().method("GET").uri("/").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["status"], "healthy");
  assert_eq!(json["service"], "text-analyzer");
  assert!(json["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn health_returns_ok() {
  let app = test_app();

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["status"], "ok");
}

// ============================================================================
// Success cases
// ============================================================================

#[tokio::test]
async fn analyze_simple_text() {
  let response = post_analyze(test_app(), "I love cloud engineering!").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["original_text"], "I love cloud engineering!");
  assert_eq!(json["word_count"], 4);
  assert_eq!(json["character_count"], 25);
  assert!(json.get("analysis_timestamp").is_some());
}

#[tokio::test]
async fn analyze_single_word() {
  let response = post_analyze(test_app(), "hello").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["word_count"], 1);
  assert_eq!(json["character_count"], 5);
}

#[tokio::test]
async fn analyze_whitespace_only() {
  let response = post_analyze(test_app(), "   ").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["original_text"], "   ");
  assert_eq!(json["word_count"], 0);
  assert_eq!(json["character_count"], 3);
}

#[tokio::test]
async fn analyze_multiple_spaces() {
  let response = post_analyze(test_app(), "hello    world").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["word_count"], 2);
  assert_eq!(json["character_count"], 14);
}

#[tokio::test]
async fn analyze_newlines() {
  let response = post_analyze(test_app(), "hello\nworld").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["word_count"], 2);
  assert_eq!(json["character_count"], 11);
}

#[tokio::test]
async fn analyze_unicode_counts_code_points() {
  let response = post_analyze(test_app(), "こんにちは 世界").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["word_count"], 2);
  // 5 + 1 + 2 code points, not the UTF-8 byte length
  assert_eq!(json["character_count"], 8);
}

#[tokio::test]
async fn analyze_text_at_limit_returns_200() {
  let response = post_analyze(test_app(), &"a".repeat(10_000)).await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  assert_eq!(json["word_count"], 1);
  assert_eq!(json["character_count"], 10_000);
}

#[tokio::test]
async fn analyze_timestamp_is_iso8601_utc() {
  let response = post_analyze(test_app(), "Testing timestamp").await;
  assert_eq!(response.status(), StatusCode::OK);

  let json = body_json(response).await;
  let ts = json["analysis_timestamp"].as_str().unwrap();
  assert!(ts.ends_with('Z'));
  assert!(
    chrono::DateTime::parse_from_rfc3339(ts).is_ok(),
    "timestamp should parse as RFC 3339: {ts}"
  );
}

// ============================================================================
// Business-rule errors (service layer)
// ============================================================================

#[tokio::test]
async fn analyze_empty_text_returns_400() {
  let response = post_analyze(test_app(), "").await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "empty_text");
  assert!(
    json["error"]["message"].as_str().unwrap().contains("Text cannot be empty"),
    "unexpected message: {}",
    json["error"]["message"]
  );
}

#[tokio::test]
async fn analyze_too_long_text_returns_400() {
  let response = post_analyze(test_app(), &"a".repeat(10_001)).await;
  assert_eq!(response.status(), StatusCode::BAD_REQUEST);

  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "text_too_long");
  assert!(
    json["error"]["message"].as_str().unwrap().contains("Text too long"),
    "unexpected message: {}",
    json["error"]["message"]
  );
}

// ============================================================================
// Validation errors (extractor boundary)
// ============================================================================

#[tokio::test]
async fn analyze_missing_text_field_returns_422() {
  let payload = serde_json::json!({ "foo": "bar" });
  let response = post_analyze_raw(test_app(), payload.to_string()).await;

  // Axum's Json extractor rejects the body before the handler runs
  assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_non_string_text_returns_422() {
  let payload = serde_json::json!({ "text": 123 });
  let response = post_analyze_raw(test_app(), payload.to_string()).await;

  assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn analyze_invalid_json_returns_client_error() {
  let response = post_analyze_raw(test_app(), "{ invalid json").await;

  // Syntax errors map to 400, data errors to 422; either way a 4xx
  assert!(
    response.status().is_client_error(),
    "expected 4xx, got: {}",
    response.status()
  );
}

// ============================================================================
// Internal faults
// ============================================================================

#[tokio::test]
async fn internal_fault_returns_sanitized_500() {
  let response = post_analyze(faulty_app(), "anything").await;
  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "internal_error");
  assert_eq!(json["error"]["message"], "Internal server error");
  // The fault detail must not leak to the caller
  assert!(!json.to_string().contains("panicked"));
}
