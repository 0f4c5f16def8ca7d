//! search-populate library
//!
//! Provisions an index on a search service, bulk-loads it with synthetic
//! product documents and reports ingestion throughput.
//!
//! The work is split across the workspace crates:
//!
//! - `search_types` - field types, the index descriptor and documents
//! - `search_client` - the [`SearchService`](search_client::SearchService) trait and its HTTP client
//! - `loadtest_generator` - synthetic document generation
//! - `loadtest_populate_search` - provisioning, batched upload and the run report
//!
//! # CLI Usage
//!
//! ```bash
//! # Recreate `large_dataset` and load 10000 documents in batches of 1000
//! search-populate populate --base-url http://localhost:3000
//!
//! # Smaller seeded run with a JSON report
//! search-populate populate --index-name products --row-count 2500 \
//!   --batch-size 500 --seed 42 --report-file report.json
//!
//! # Check the document count afterwards
//! search-populate verify --index-name products --row-count 2500
//! ```

pub mod loadtest;

pub use loadtest_populate_search::{PopulateConfig, PopulateError, RunReport};
