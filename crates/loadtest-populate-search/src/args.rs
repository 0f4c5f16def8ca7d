//! CLI argument definitions for the search populator.

use crate::config::{PopulateConfig, DEFAULT_INDEX_NAME, DEFAULT_PIPELINE_DEPTH};
use clap::Args;
use search_client::DEFAULT_BASE_URL;
use std::path::PathBuf;
use std::time::Duration;

// Re-export CommonPopulateArgs for convenience
pub use loadtest_populate::CommonPopulateArgs;

/// Search-service-specific populate arguments.
#[derive(Args, Clone, Debug)]
pub struct SearchPopulateArgs {
    /// Search service base URL
    #[arg(long, env = "SEARCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Index to recreate and populate
    #[arg(long, env = "SEARCH_INDEX_NAME", default_value = DEFAULT_INDEX_NAME)]
    pub index_name: String,

    /// Bearer token for the service's protected endpoints
    #[arg(long, env = "SEARCH_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds (transport default when omitted)
    #[arg(long, env = "SEARCH_REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: Option<u64>,

    /// Batches generated ahead of the uploader (0 = generate inline)
    #[arg(long, default_value_t = DEFAULT_PIPELINE_DEPTH)]
    pub pipeline_depth: usize,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report_file: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonPopulateArgs,
}

impl SearchPopulateArgs {
    /// Build the run configuration.
    pub fn to_config(&self) -> PopulateConfig {
        PopulateConfig {
            base_url: self.base_url.clone(),
            index_name: self.index_name.clone(),
            total_documents: self.common.row_count,
            batch_size: self.common.batch_size,
            seed: self.common.seed,
            api_token: self.api_token.clone(),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            pipeline_depth: self.pipeline_depth,
        }
    }
}

/// Arguments for checking a populated index's document count.
#[derive(Args, Clone, Debug)]
pub struct SearchVerifyArgs {
    /// Search service base URL
    #[arg(long, env = "SEARCH_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Index to check
    #[arg(long, env = "SEARCH_INDEX_NAME", default_value = DEFAULT_INDEX_NAME)]
    pub index_name: String,

    /// Bearer token for the service's protected endpoints
    #[arg(long, env = "SEARCH_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Expected number of documents
    #[arg(long, default_value_t = loadtest_populate::DEFAULT_ROW_COUNT)]
    pub row_count: u64,
}
