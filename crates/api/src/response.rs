//! Shared response body types.

use serde::Serialize;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub message: String,
    /// Path of the request that failed.
    pub uri: String,
}

/// Confirmation payload for operations with no entity to return (delete).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
