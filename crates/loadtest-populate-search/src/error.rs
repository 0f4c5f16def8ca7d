//! Error types for the search populator.

use search_client::ClientError;
use thiserror::Error;

/// Index creation failures. Always fatal to the run.
#[derive(Error, Debug)]
pub enum ProvisionError {
    /// Service answered the create request with a status other than 200/201.
    #[error("Failed to create index '{index}' (status {status}): {body}")]
    Rejected {
        index: String,
        status: u16,
        body: String,
    },

    /// Create request never got a response.
    #[error("Failed to create index '{index}': {source}")]
    Transport {
        index: String,
        #[source]
        source: ClientError,
    },
}

/// Errors that can occur during population.
#[derive(Error, Debug)]
pub enum PopulateError {
    /// Liveness probe could not reach the service.
    #[error("Search service is not running at {base_url}: {source}")]
    ServiceUnavailable {
        base_url: String,
        #[source]
        source: ClientError,
    },

    /// Index provisioning failed.
    #[error(transparent)]
    Provision(#[from] ProvisionError),

    /// Configuration rejected before any request.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// HTTP client could not be built.
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Document count could not be read back.
    #[error("Verification failed for index '{index}': {source}")]
    Verify {
        index: String,
        #[source]
        source: ClientError,
    },

    /// Report file IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
