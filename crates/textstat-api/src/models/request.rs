//! Request model definitions

use serde::Deserialize;

/// Text analysis request
///
/// The `text` field must be present and be a string; anything else is
/// rejected by the JSON extractor before the handler runs.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
  /// Text to analyze
  pub text: String,
}
