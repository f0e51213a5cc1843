//! API response envelope
//!
//! Every backend endpoint answers the same shape:
//! ```json
//! {
//!     "status": "success",
//!     "message": "...",
//!     "data": { ... }
//! }
//! ```
//! A response is successful iff `status == "success"`; any other value is an
//! application-level failure and `message`, when present, is shown verbatim.

use serde::{Deserialize, Serialize};

/// Status value marking a successful response
pub const STATUS_SUCCESS: &str = "success";

/// Unified API response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// `"success"` or an error status
    pub status: String,
    /// Human-readable message (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Create a successful envelope
    pub fn ok(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            message: None,
            data: Some(data),
        }
    }

    /// Create an error envelope
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message.into()),
            data: None,
        }
    }

    /// Whether the backend reported success
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Backend message, or a generic fallback for silent failures
    pub fn message_or_default(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Request failed".to_string())
    }
}
