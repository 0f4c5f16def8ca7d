//! HTTP client for the search service.
//!
//! The loader only ever talks to the service through the [`SearchService`]
//! trait. [`HttpSearchClient`] implements it over `reqwest`; tests swap in
//! in-memory implementations.
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |---|---|
//! | liveness | `GET /health` |
//! | delete index | `DELETE /indices/{name}` |
//! | create index | `POST /indices` |
//! | ingest documents | `POST /indices/{name}/documents` |
//! | index stats | `GET /indices/{name}/stats` |
//!
//! # Example
//!
//! ```ignore
//! use search_client::{ClientConfig, HttpSearchClient, SearchService};
//!
//! let client = HttpSearchClient::new(ClientConfig::new("http://localhost:3000"))?;
//! client.health().await?;
//! ```

pub mod client;
pub mod error;
pub mod service;

pub use client::{ClientConfig, HttpSearchClient, DEFAULT_BASE_URL};
pub use error::ClientError;
pub use reqwest::Url;
pub use service::{ApiResponse, IndexStats, SearchService, ServiceResponse};
