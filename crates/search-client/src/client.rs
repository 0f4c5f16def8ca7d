//! `reqwest`-backed implementation of [`SearchService`].

use crate::error::ClientError;
use crate::service::{ApiResponse, IndexStats, SearchService, ServiceResponse};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use search_types::{Document, IndexDescriptor};
use serde::Serialize;
use std::time::Duration;

/// Default service address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Connection settings for [`HttpSearchClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL, e.g. `http://localhost:3000`
    pub base_url: String,
    /// Bearer token sent on every request when set
    pub api_token: Option<String>,
    /// Per-request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            timeout: None,
        }
    }

    pub fn with_api_token(mut self, token: Option<String>) -> Self {
        self.api_token = token;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Serialize)]
struct AddDocumentsRequest<'a> {
    documents: &'a [Document],
}

/// HTTP client for the search service.
#[derive(Debug, Clone)]
pub struct HttpSearchClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpSearchClient {
    /// Build a client. Fails if the base URL is not http(s) or the TLS backend
    /// cannot be initialized.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let parsed = Url::parse(&config.base_url)
            .map_err(|_| ClientError::InvalidUrl(config.base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(ClientError::InvalidUrl(config.base_url));
        }
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            api_token: config.api_token,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<ServiceResponse, ClientError> {
        let response = self.authorize(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ServiceResponse { status, body })
    }
}

#[async_trait]
impl SearchService for HttpSearchClient {
    async fn health(&self) -> Result<ServiceResponse, ClientError> {
        let url = self.url("/health");
        tracing::debug!("GET {url}");
        self.send(self.client.get(&url)).await
    }

    async fn delete_index(&self, name: &str) -> Result<ServiceResponse, ClientError> {
        let url = self.url(&format!("/indices/{name}"));
        tracing::debug!("DELETE {url}");
        self.send(self.client.delete(&url)).await
    }

    async fn create_index(
        &self,
        descriptor: &IndexDescriptor,
    ) -> Result<ServiceResponse, ClientError> {
        let url = self.url("/indices");
        tracing::debug!(
            "POST {url} (index '{}', {} fields)",
            descriptor.name,
            descriptor.fields.len()
        );
        self.send(self.client.post(&url).json(descriptor)).await
    }

    async fn add_documents(
        &self,
        index: &str,
        documents: &[Document],
    ) -> Result<ServiceResponse, ClientError> {
        let url = self.url(&format!("/indices/{index}/documents"));
        tracing::debug!("POST {url} ({} documents)", documents.len());
        self.send(
            self.client
                .post(&url)
                .json(&AddDocumentsRequest { documents }),
        )
        .await
    }

    async fn index_stats(&self, index: &str) -> Result<IndexStats, ClientError> {
        let url = self.url(&format!("/indices/{index}/stats"));
        tracing::debug!("GET {url}");
        let response = self.send(self.client.get(&url)).await?;

        if !(200..300).contains(&response.status) {
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let envelope: ApiResponse<IndexStats> = serde_json::from_str(&response.body)?;
        envelope.into_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_url() {
        let result = HttpSearchClient::new(ClientConfig::new("ws://localhost:3000"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));

        let result = HttpSearchClient::new(ClientConfig::new("localhost:3000"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_rejects_url_without_host() {
        for url in ["http://", "https://", "not a url"] {
            let result = HttpSearchClient::new(ClientConfig::new(url));
            assert!(
                matches!(result, Err(ClientError::InvalidUrl(_))),
                "{url} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_host_with_port_and_path() {
        let client =
            HttpSearchClient::new(ClientConfig::new("https://search.internal:8443/api/")).unwrap();
        assert_eq!(client.base_url(), "https://search.internal:8443/api");
    }

    #[test]
    fn test_trims_trailing_slash() {
        let client = HttpSearchClient::new(ClientConfig::new("http://localhost:3000/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.url("/indices/products"),
            "http://localhost:3000/indices/products"
        );
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_token.is_none());
        assert!(config.timeout.is_none());
    }
}
