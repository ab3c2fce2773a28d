//! Custom error types for farm-tracker
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for farm-tracker operations
#[derive(Error, Debug)]
pub enum FarmError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A form failed local validation and was never submitted
    #[error("{0}")]
    Validation(String),

    /// The remote API rejected the call or could not be reached
    #[error("{0}")]
    Gateway(String),

    /// The farm API could not be reached at all
    #[error("Could not reach the farm API: {0}")]
    Unreachable(String),

    /// An operation needed a logged-in user
    #[error("Not logged in. Run 'farmtrack login' first.")]
    NotAuthenticated,

    /// The operation has no API endpoint behind it
    #[error("{0} is not available yet")]
    Unsupported(&'static str),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl FarmError {
    /// Create a gateway error from any message
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from the remote API
    pub fn is_gateway(&self) -> bool {
        matches!(self, Self::Gateway(_) | Self::Unreachable(_))
    }

    /// Check if the request never got an answer from the API
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable(_))
    }

    /// Check if this is an unsupported-operation error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

impl From<std::io::Error> for FarmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for FarmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for FarmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Unreachable(err.to_string())
        } else {
            Self::Gateway(err.to_string())
        }
    }
}

impl From<csv::Error> for FarmError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for farm-tracker operations
pub type FarmResult<T> = Result<T, FarmError>;
