//! Config loading from environment variables

use super::constants::DEFAULT_BIND_ADDR;
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8000")
  pub bind_addr: String,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// `TEXTSTAT_API_BIND_ADDR` overrides the full bind address.
  /// `PORT` overrides the port only, keeping the default host; the
  /// full-address override wins when both are set.
  ///
  /// # Errors
  /// Returns an error if `PORT` is not a valid port number
  pub fn from_env() -> crate::errors::Result<Self> {
    if let Ok(bind_addr) = std::env::var("TEXTSTAT_API_BIND_ADDR") {
      return Ok(Self { bind_addr });
    }

    let bind_addr = match std::env::var("PORT") {
      Ok(port) => {
        let port: u16 = port
          .parse()
          .map_err(|_| ApiError::config(format!("Invalid PORT value: {}", port)))?;
        Self::with_port(DEFAULT_BIND_ADDR, port)
      }
      Err(_) => DEFAULT_BIND_ADDR.to_string(),
    };

    Ok(Self { bind_addr })
  }

  /// Replaces the port of a "host:port" address
  fn with_port(addr: &str, port: u16) -> String {
    let host = addr.rsplit_once(':').map_or(addr, |(host, _)| host);
    format!("{}:{}", host, port)
  }
}
