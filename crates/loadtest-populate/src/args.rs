//! Common CLI argument definitions shared by all populators.

use clap::Args;

/// Documents generated when no count is given.
pub const DEFAULT_ROW_COUNT: u64 = 10_000;

/// Documents per ingestion request when no batch size is given.
pub const DEFAULT_BATCH_SIZE: usize = 1000;

/// Common arguments shared by all populators.
#[derive(Args, Clone, Debug)]
pub struct CommonPopulateArgs {
    /// Number of documents to generate
    #[arg(long, env = "POPULATE_ROW_COUNT", default_value_t = DEFAULT_ROW_COUNT)]
    pub row_count: u64,

    /// Number of documents per ingestion request
    #[arg(long, env = "POPULATE_BATCH_SIZE", default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Random seed (same seed = same field values); omit for a fresh random run
    #[arg(long, env = "POPULATE_SEED")]
    pub seed: Option<u64>,

    /// Dry-run mode: validate configuration and plan batches without contacting the service
    #[arg(long)]
    pub dry_run: bool,
}
