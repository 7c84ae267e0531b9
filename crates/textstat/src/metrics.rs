//! Pure text metrics computation

use serde::Serialize;

/// Computed metrics for a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextMetrics {
  /// Number of maximal non-whitespace runs in the text
  pub word_count: usize,
  /// Number of Unicode code points in the text (not bytes)
  pub character_count: usize,
}

/// Computes word and character counts for a text
///
/// Words are maximal runs of non-whitespace characters: the text is
/// split on runs of whitespace (spaces, tabs, newlines) and empty
/// fragments are discarded. The character count includes whitespace
/// and punctuation and counts code points, so multibyte characters
/// count as one each.
///
/// # Arguments
/// * `text` - Text to measure
///
/// # Returns
/// The computed `TextMetrics`
#[must_use]
pub fn measure(text: &str) -> TextMetrics {
  TextMetrics {
    word_count: text.split_whitespace().count(),
    character_count: text.chars().count(),
  }
}
