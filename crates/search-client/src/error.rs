//! Error types for the search client.

use thiserror::Error;

/// Errors surfaced by [`SearchService`](crate::SearchService) implementations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, timeout or other transport failure.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Base URL is not an http(s) URL.
    #[error("Invalid base URL '{0}': expected an http:// or https:// URL with a host")]
    InvalidUrl(String),

    /// Response body could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Service answered with a status the caller does not accept.
    #[error("Service returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered with an error envelope.
    #[error("Service error: {0}")]
    Api(String),
}
