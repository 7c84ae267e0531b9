//! Validating analyzer over the pure metrics computation

use crate::errors::{TextStatError, TextStatResult};
use crate::metrics::{TextMetrics, measure};

/// Default maximum text length (code points)
pub const DEFAULT_MAX_CHARS: usize = 10_000;

/// Text analyzer with business-rule validation
///
/// Rejects empty and oversized input before computing metrics. The
/// limit counts code points, matching the reported `character_count`.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer {
  /// Maximum accepted text length (code points, inclusive)
  max_chars: usize,
}

impl Default for Analyzer {
  fn default() -> Self {
    Self::new(DEFAULT_MAX_CHARS)
  }
}

impl Analyzer {
  /// Creates an analyzer with the given maximum text length
  #[must_use]
  pub fn new(max_chars: usize) -> Self {
    Self { max_chars }
  }

  /// Maximum accepted text length (code points, inclusive)
  #[must_use]
  pub fn max_chars(&self) -> usize {
    self.max_chars
  }

  /// Validates the text and computes its metrics
  ///
  /// # Errors
  /// - `TextStatError::EmptyText` if the text is empty
  /// - `TextStatError::TextTooLong` if the text exceeds the limit;
  ///   a text of exactly the limit is accepted
  pub fn analyze(&self, text: &str) -> TextStatResult<TextMetrics> {
    if text.is_empty() {
      return Err(TextStatError::EmptyText);
    }

    let chars = text.chars().count();
    if chars > self.max_chars {
      return Err(TextStatError::TextTooLong {
        actual: chars,
        max: self.max_chars,
      });
    }

    Ok(measure(text))
  }
}
