//! textstat-api crate
//!
//! Web server exposing text analysis as an HTTP API (validating
//! variant: structured errors, response timestamps, health probes).
//!
//! ## Endpoints
//! - `POST /analyze` - Text Analysis
//! - `GET /` - Liveness Check
//! - `GET /health` - Readiness Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "I love cloud engineering!"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse};
pub use service::AnalyzeServiceFull;
