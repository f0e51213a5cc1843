//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network/transport level)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with `status != "success"`; message shown verbatim
    #[error("{message}")]
    Api { message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Client-side validation failure; blocks the request entirely
    #[error("Validation error: {0}")]
    Validation(String),

    /// Report pagination exceeded the fail-closed cap
    #[error("Report collection exceeded {pages} pages without terminating")]
    PageLimitExceeded { pages: u32 },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV artifact write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while writing an artifact
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
