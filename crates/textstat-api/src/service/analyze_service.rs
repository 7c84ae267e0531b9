//! Text analysis service

use textstat::Analyzer;

use crate::config::MAX_TEXT_CHARS;
use crate::errors::Result;
use crate::models::{AnalyzeRequest, AnalyzeResponse, utc_timestamp};

/// Common interface for the text analysis service
///
/// This trait allows swapping the production implementation
/// (`AnalyzeServiceFull`) with test stubs/mocks.
pub trait AnalyzeService: Send + Sync {
  /// Analyzes the request text and builds the response
  ///
  /// # Errors
  /// - Input error (empty text, length exceeded)
  /// - Internal error
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Production text analysis service
///
/// Wraps the validating `textstat::Analyzer` and stamps the response
/// with the analysis time.
#[derive(Clone)]
pub struct AnalyzeServiceFull {
  /// Validating analyzer (code-point length limit)
  analyzer: Analyzer,
}

impl Default for AnalyzeServiceFull {
  fn default() -> Self {
    Self::new()
  }
}

impl AnalyzeServiceFull {
  /// Initializes the service with the configured text length limit
  #[must_use]
  pub fn new() -> Self {
    Self {
      analyzer: Analyzer::new(MAX_TEXT_CHARS),
    }
  }

  /// Runs validation and metrics computation for a request
  ///
  /// The original text is echoed back verbatim, without trimming.
  ///
  /// # Errors
  /// - If the text is empty
  /// - If the text exceeds the maximum length
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let metrics = self.analyzer.analyze(&request.text)?;

    Ok(AnalyzeResponse {
      original_text: request.text,
      word_count: metrics.word_count,
      character_count: metrics.character_count,
      analysis_timestamp: utc_timestamp(),
    })
  }
}

/// Production implementation of trait `AnalyzeService`
impl AnalyzeService for AnalyzeServiceFull {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Note: writing `self.analyze(...)` would recursively call the trait
    // method, so explicitly call the inherent method.
    AnalyzeServiceFull::analyze(self, request)
  }
}
