//! Error types for the split-cleanup CLI

use thiserror::Error;

/// Result type alias for split-cleanup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Admin API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// Any non-success status the caller does not handle itself
    #[error("{status} - {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration errors, all reported before any request is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API key must be provided via --api-key or SPLIT_API_KEY env var.")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
