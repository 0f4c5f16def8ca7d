//! Command-line interface for search-populate
//!
//! # Usage Examples
//!
//! ```bash
//! # Recreate the default index and load 10000 documents
//! search-populate populate --base-url http://localhost:3000
//!
//! # Protected service, custom index, seeded data, JSON report
//! SEARCH_API_TOKEN=secret search-populate populate \
//!   --index-name products \
//!   --row-count 50000 \
//!   --batch-size 1000 \
//!   --seed 42 \
//!   --report-file populate-report.json
//!
//! # Validate the configuration and print the batch plan only
//! search-populate populate --row-count 2500 --dry-run
//!
//! # Check the document count reported by the service
//! search-populate verify --index-name products --row-count 50000
//! ```

use clap::{Parser, Subcommand};
use loadtest_populate_search::{SearchPopulateArgs, SearchVerifyArgs};
use search_populate::loadtest::{populate::run_populate, verify::run_verify};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "search-populate")]
#[command(about = "Provision a search index and bulk-load it with synthetic documents")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recreate the index and populate it with synthetic product documents
    Populate {
        #[command(flatten)]
        args: SearchPopulateArgs,
    },

    /// Check that the index holds the expected number of documents
    Verify {
        #[command(flatten)]
        args: SearchVerifyArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Populate { args } => run_populate(args).await,
        Commands::Verify { args } => run_verify(args).await,
    }
}
