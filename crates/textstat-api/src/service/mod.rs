//! Service module

mod analyze_service;

pub use analyze_service::{AnalyzeService, AnalyzeServiceFull};
