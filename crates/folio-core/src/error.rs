//! Error types for folio-core
//!
//! Every error here is non-fatal for the page: callers log it and fall
//! back to an in-memory or previously displayed value.

use thiserror::Error;

/// Errors from the preference store
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error while reading or writing the backing file
    #[error("I/O error: {0}")]
    Io(String),

    /// The backing file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage is not available at all on this platform
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Errors from fetching or decoding a price
#[derive(Debug, Error)]
pub enum TickerError {
    /// The request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(String),

    /// The endpoint answered with a non-success status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// The body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(String),

    /// The body lacked the asset or one of its fields
    #[error("Missing field: {0}")]
    MissingField(String),
}

impl From<reqwest::Error> for TickerError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            TickerError::Status(status.as_u16())
        } else if err.is_decode() {
            TickerError::Decode(err.to_string())
        } else {
            TickerError::Http(err.to_string())
        }
    }
}

impl TickerError {
    /// Create a new MissingField error
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }
}

/// Errors from tone playback
#[derive(Debug, Error)]
pub enum SoundError {
    /// The platform has no audio API
    #[error("Audio unsupported: {0}")]
    Unsupported(String),

    /// The audio API rejected the request
    #[error("Audio platform error: {0}")]
    Platform(String),
}

/// Errors from configuration validation
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration value is out of range or malformed
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
