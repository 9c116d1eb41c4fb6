//! Error types for the registry API client.
//!
//! # Design
//! The layer defines no taxonomy of its own beyond what the transport model
//! forces: a response either carried an unexpected status, or its body could
//! not be decoded, or a request payload could not be encoded. Nothing is
//! caught, translated further, or retried here.

use thiserror::Error;

/// Errors returned by the `build_*` / `parse_*` methods of the service
/// clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-200 status. The raw body (lossy UTF-8) is
    /// kept so callers can surface the backend's error envelope.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
