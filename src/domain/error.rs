//! Error types for the explorer.
//!
//! This module defines the centralized error type [`ExplorerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for explorer operations.
///
/// The first three variants form the user-facing taxonomy: a response outside the
/// success range, a body that is not valid JSON, and an incomplete credential form.
/// The remaining variants cover the ambient layers (network, storage, configuration).
///
/// # Examples
///
/// ```
/// use reactor_explorer::ExplorerError;
///
/// let err = ExplorerError::Transport { status: 401, status_text: "Unauthorized".to_string() };
/// assert_eq!(err.to_string(), "API error: 401 Unauthorized");
/// ```
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// The API answered with a status outside the 2xx range.
    #[error("API error: {status} {status_text}")]
    Transport {
        /// Numeric HTTP status.
        status: u16,
        /// Canonical reason phrase, empty when the status has none.
        status_text: String,
    },

    /// The response body (or a part of it) could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request never produced a status (connection, TLS, DNS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Session store read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl From<serde_json::Error> for ExplorerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

/// A specialized `Result` type for explorer operations.
pub type Result<T> = std::result::Result<T, ExplorerError>;
