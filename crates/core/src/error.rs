//! Error types for Searchable
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for Searchable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the index and the orchestrator
#[derive(Debug, Error)]
pub enum Error {
    /// Empty word, docId or input passed where a value is required
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Search strategy name not recognized
    #[error("Unknown search strategy \"{0}\"")]
    UnknownStrategy(String),

    /// Snapshot could not be serialized or parsed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration rejected by validation or unparsable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Shorthand for [`Error::InvalidConfig`]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// True for errors the lenient insert path swallows
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
