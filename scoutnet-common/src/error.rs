//! Error types for Scoutnet
//!
//! Policy outcomes are never errors. These cover the infrastructure around
//! the policy: configuration loading and I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for Scoutnet operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable error code for logs and API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config_error",
            Self::IoError(_) => "io_error",
            Self::JsonError(_) => "json_error",
        }
    }
}
