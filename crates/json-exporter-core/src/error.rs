//! Shared error type across the exporter crates.

use thiserror::Error;

/// Stable error codes, used in structured logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid startup configuration.
    Config,
    /// Upstream could not be reached (connect, TLS, timeout).
    Connection,
    /// Upstream answered with a non-success status.
    HttpStatus,
    /// Upstream body could not be read.
    BodyRead,
    /// Upstream body is not well-formed JSON.
    Parse,
    /// A gauge could not be registered in the scrape registry.
    Registration,
    /// The scrape registry could not be serialized.
    Encode,
}

impl ErrorCode {
    /// String representation used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG",
            ErrorCode::Connection => "CONNECTION",
            ErrorCode::HttpStatus => "HTTP_STATUS",
            ErrorCode::BodyRead => "BODY_READ",
            ErrorCode::Parse => "PARSE",
            ErrorCode::Registration => "REGISTRATION",
            ErrorCode::Encode => "ENCODE",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("invalid config: {0}")]
    Config(String),
    #[error("probe failed: {0}")]
    Connection(String),
    #[error("probe failed: {url} returned HTTP {status}")]
    HttpStatus { status: u16, url: String },
    #[error("reading probe response failed: {0}")]
    BodyRead(String),
    #[error("invalid json: {0}")]
    Parse(String),
    #[error("metric registration failed: {0}")]
    Registration(String),
    #[error("encoding metrics failed: {0}")]
    Encode(String),
}

impl ExporterError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExporterError::Config(_) => ErrorCode::Config,
            ExporterError::Connection(_) => ErrorCode::Connection,
            ExporterError::HttpStatus { .. } => ErrorCode::HttpStatus,
            ExporterError::BodyRead(_) => ErrorCode::BodyRead,
            ExporterError::Parse(_) => ErrorCode::Parse,
            ExporterError::Registration(_) => ErrorCode::Registration,
            ExporterError::Encode(_) => ErrorCode::Encode,
        }
    }
}
