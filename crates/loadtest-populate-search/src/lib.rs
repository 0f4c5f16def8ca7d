//! Search service populator for load testing.
//!
//! This crate provisions the product-catalog index on a search service,
//! streams synthetic documents into it in fixed-size batches and reports
//! throughput.
//!
//! # Run lifecycle
//!
//! ```text
//! NotStarted ─► CheckingService ─► Provisioning ─► Ingesting ─► Completed
//!                     │                  │
//!                     └──────────────────┴──────► Aborted
//! ```
//!
//! A failed liveness probe or a rejected index creation aborts the run. Once
//! ingestion starts the run always completes; rejected batches are collected
//! in the [`RunReport`].
//!
//! # Example
//!
//! ```ignore
//! use loadtest_populate_search::{PopulateConfig, SearchPopulator};
//! use search_client::HttpSearchClient;
//!
//! let config = PopulateConfig::default();
//! let client = HttpSearchClient::new(config.client_config())?;
//! let mut populator = SearchPopulator::new(client, config);
//!
//! let report = populator.run().await?;
//! println!("{:.2} docs/sec", report.docs_per_second);
//! ```

pub mod args;
pub mod batch;
pub mod config;
pub mod error;
pub mod populator;
pub mod provision;
pub mod report;
pub mod upload;
pub mod verify;

pub use args::{SearchPopulateArgs, SearchVerifyArgs};
pub use batch::{plan_batches, Batch, Batches};
pub use config::{PopulateConfig, DEFAULT_INDEX_NAME, MAX_DOCUMENTS_PER_REQUEST};
pub use error::{PopulateError, ProvisionError};
pub use populator::{run, RunState, SearchPopulator};
pub use provision::{provision, DeleteOutcome};
pub use report::RunReport;
pub use upload::{
    BatchFailure, BatchProgress, BatchUploader, LogProgress, ProgressObserver, UploadSummary,
};
pub use verify::{verify_document_count, VerifyReport};
