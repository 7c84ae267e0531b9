//! Model module

mod request;
mod response;

pub use request::AnalyzeRequest;
pub use response::{AnalyzeResponse, HealthStatus, RootStatus, utc_timestamp};
