//! Unified error types for mathword.
use thiserror::Error;

/// Main error type for mathword operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Syntax tree could not be decoded from JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Conversion options could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),

    /// Image source could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// HTTP transport error
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// XML serialization error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Conversion was cancelled before completion
    #[error("Conversion cancelled")]
    Cancelled,
}

/// Result type for mathword operations.
pub type Result<T> = std::result::Result<T, Error>;
