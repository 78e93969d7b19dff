//! Error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// Message shown to clients for any persistence failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Structured JSON error body: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(format!("Missing `{}` in request body", field))
    }

    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    pub fn internal_error() -> Self {
        Self::new(INTERNAL_ERROR_MESSAGE)
    }
}
