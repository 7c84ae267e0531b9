//! API configuration constants

/// Maximum input text length (code points)
///
/// Texts up to 10,000 characters are accepted; the limit matches the
/// `character_count` unit reported to clients.
pub const MAX_TEXT_CHARS: usize = 10_000;

/// Default bind address
///
/// Standard localhost port for development use.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Service name reported by the liveness endpoint
pub const SERVICE_NAME: &str = "text-analyzer";
