//! API error definitions

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// Domain error type from the textstat crate
use textstat::TextStatError;

/// Error category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Input text is empty
  EmptyText,
  /// Input text is too long
  TextTooLong,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the stable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::EmptyText => "empty_text",
      Self::TextTooLong => "text_too_long",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::EmptyText | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Input text is empty
  #[error("Text cannot be empty")]
  EmptyText,

  /// Input text is too long
  #[error("{}", TextStatError::TextTooLong { actual: *actual, max: *max })]
  TextTooLong {
    /// Actual length in code points
    actual: usize,
    /// Maximum allowed length in code points
    max: usize,
  },

  /// Internal error
  #[error("Internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error category
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::EmptyText => ApiErrorKind::EmptyText,
      Self::TextTooLong { .. } => ApiErrorKind::TextTooLong,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the stable error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// Returns the message sent to the client
  ///
  /// Server-side faults are reduced to a generic message; the detail
  /// is logged but never leaves the process.
  #[must_use]
  pub fn client_message(&self) -> String {
    match self {
      Self::Internal(_) | Self::Config(_) => "Internal server error".to_string(),
      _ => self.to_string(),
    }
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// JSON structure of error responses
#[derive(Serialize)]
struct ErrorResponse {
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();

    if status.is_server_error() {
      tracing::error!(code = self.code(), detail = %self, "request failed");
    }

    let body = ErrorResponse {
      error: ErrorBody {
        code: self.code(),
        message: self.client_message(),
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from TextStatError to ApiError
///
/// Maps domain-layer errors to API-layer errors.
impl From<TextStatError> for ApiError {
  fn from(err: TextStatError) -> Self {
    match err {
      TextStatError::EmptyText => ApiError::EmptyText,
      TextStatError::TextTooLong { actual, max } => ApiError::TextTooLong { actual, max },
      // #[non_exhaustive] enum, so handle variants added later
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;
