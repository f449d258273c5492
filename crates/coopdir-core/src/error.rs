//! Error types for coopdir-core

use thiserror::Error;

/// Result type alias using coopdir-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in coopdir-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Directory endpoint answered with a non-success status
    #[error("Directory request failed with HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
