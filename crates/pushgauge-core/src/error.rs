//! Shared error type across pushgauge crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed push payload.
    BadRequest,
    /// No instrument registered under the requested name.
    NotFound,
    /// Invalid startup configuration.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, PushGaugeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum PushGaugeError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("metric not found: {0}")]
    NotFound(String),
    #[error("duplicate metric name: {0}")]
    DuplicateMetric(String),
    #[error("invalid config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PushGaugeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            PushGaugeError::BadRequest(_) => ClientCode::BadRequest,
            PushGaugeError::NotFound(_) => ClientCode::NotFound,
            PushGaugeError::DuplicateMetric(_) | PushGaugeError::Config(_) => ClientCode::Config,
            PushGaugeError::Internal(_) => ClientCode::Internal,
        }
    }
}
