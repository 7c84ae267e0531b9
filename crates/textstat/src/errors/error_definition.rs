//! Error definitions

use thiserror::Error;

/// Text analysis errors
///
/// Business-rule violations raised by the validation guard ahead of
/// the pure metrics computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TextStatError {
  /// Input text is the empty string
  #[error("Text cannot be empty")]
  EmptyText,

  /// Input text exceeds the maximum length
  #[error("Text too long (max {} characters)", fmt_thousands(*max))]
  TextTooLong {
    /// Actual length in code points
    actual: usize,
    /// Maximum allowed length in code points
    max: usize,
  },
}

/// Result type alias
pub type TextStatResult<T> = std::result::Result<T, TextStatError>;

/// Formats a count with thousands separators ("10000" -> "10,000")
fn fmt_thousands(n: usize) -> String {
  let digits = n.to_string();
  let mut out = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  out
}
