//! Wire response envelope types
//!
//! Every response body carries a stable `success` flag plus a short
//! human-readable message. Endpoint-specific payloads (token, user,
//! notes) are defined as typed records in the API layer and embed
//! the same flag.

use serde::{Deserialize, Serialize};

/// Plain success envelope: `{"success": true, "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable message
    pub message: String,
}

impl ApiMessage {
    /// Create a successful message response
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Failure envelope: `{"success": false, "message": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,

    /// Human-readable error message, distinguishable per error kind
    pub message: String,
}

impl ErrorBody {
    /// Create an error response body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
