//! textstat text analysis library
//!
//! Computes basic metrics (word count, character count) for a text,
//! with business-rule validation ahead of the pure computation.

/// Error module - defines TextStatError, TextStatResult and related error types
pub mod errors;

/// Metrics module - pure word/character counting over a text
pub mod metrics;

/// Service module - Analyzer, the validating entry point over the metrics
pub mod service;

/// Re-exports
pub use errors::{TextStatError, TextStatResult};
pub use metrics::{TextMetrics, measure};
pub use service::Analyzer;
