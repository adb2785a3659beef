//! Error types for schematism.

use thiserror::Error;

/// Result type for schematism operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for schematism operations.
///
/// The core parsing and scoring functions never fail on well-typed input;
/// errors surface only at the JSON boundary and at the provider seams.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Parse error (structured response did not match the page record shape).
    #[error("Parse error: {0}")]
    Parse(String),

    /// An external provider (OCR, labeler, extractor) failed.
    #[error("Provider error: {0}")]
    Provider(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Create a provider error.
    pub fn provider(msg: impl Into<String>) -> Self {
        Error::Provider(msg.into())
    }
}
