//! Standardized error response body.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint.
///
/// Carries only a human-readable message; there are no structured error codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// The HTTP status code.
    pub status: u16,

    /// A short summary of the status, e.g. "Not Found".
    pub title: String,

    /// A human-readable explanation specific to this occurrence.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, "Bad Request", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, "Not Found", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(500, "Internal Server Error", message)
    }
}
