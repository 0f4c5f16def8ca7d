//! The search service seam.

use crate::error::ClientError;
use async_trait::async_trait;
use search_types::{Document, IndexDescriptor};
use serde::Deserialize;

/// Status and raw body of a service response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
}

impl ServiceResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 OK or 201 Created, the only statuses create and ingest accept.
    pub fn is_ok_or_created(&self) -> bool {
        matches!(self.status, 200 | 201)
    }
}

/// `{ success, data, error }` envelope wrapping every JSON response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, turning an error envelope into [`ClientError::Api`].
    pub fn into_data(self) -> Result<T, ClientError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ClientError::Api(
                self.error
                    .unwrap_or_else(|| "response carried no data".to_string()),
            )),
        }
    }
}

/// Per-field entry of [`IndexStats`].
///
/// `field_type` is kept as the service reports it; indices created by other
/// clients may carry types the loader never writes (such as `json`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldStats {
    pub name: String,
    pub field_type: String,
    #[serde(default)]
    pub indexed: bool,
    #[serde(default)]
    pub stored: bool,
}

/// Payload of `GET /indices/{name}/stats`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IndexStats {
    pub name: String,
    pub document_count: u64,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default)]
    pub fields: Vec<FieldStats>,
    pub created_at: Option<String>,
}

/// Operations the loader needs from the search service.
///
/// `Err` is reserved for failures to obtain a response at all; any HTTP
/// status comes back as a [`ServiceResponse`] for the caller to classify.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Probe `GET /health`. Any response counts as reachable.
    async fn health(&self) -> Result<ServiceResponse, ClientError>;

    /// `DELETE /indices/{name}`.
    async fn delete_index(&self, name: &str) -> Result<ServiceResponse, ClientError>;

    /// `POST /indices` with the full descriptor.
    async fn create_index(
        &self,
        descriptor: &IndexDescriptor,
    ) -> Result<ServiceResponse, ClientError>;

    /// `POST /indices/{name}/documents` with the documents in order.
    async fn add_documents(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<ServiceResponse, ClientError>;

    /// `GET /indices/{name}/stats`, decoded. Non-2xx statuses are errors here.
    async fn index_stats(&self, index: &str) -> Result<IndexStats, ClientError>;
}
