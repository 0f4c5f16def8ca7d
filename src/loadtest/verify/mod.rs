//! Loadtest verify command handler.

use anyhow::Context;
use loadtest_populate_search::{verify_document_count, SearchVerifyArgs};
use search_client::{ClientConfig, HttpSearchClient};
use search_types::validate_index_name;

use super::populate::mask_url_credentials;

/// Run verify command to check the populated index holds the expected number of documents.
pub async fn run_verify(args: SearchVerifyArgs) -> anyhow::Result<()> {
    validate_index_name(&args.index_name)
        .with_context(|| format!("Invalid index name '{}'", args.index_name))?;

    tracing::info!(
        "Verifying {} documents in index '{}' at {}",
        args.row_count,
        args.index_name,
        mask_url_credentials(&args.base_url)
    );

    let config = ClientConfig::new(&args.base_url).with_api_token(args.api_token.clone());
    let client = HttpSearchClient::new(config).with_context(|| {
        format!(
            "Invalid search service URL '{}'",
            mask_url_credentials(&args.base_url)
        )
    })?;

    let report = verify_document_count(&client, &args.index_name, args.row_count)
        .await
        .with_context(|| format!("Failed to read stats for index '{}'", args.index_name))?;

    if report.is_match() {
        tracing::info!("Verification completed successfully - document count matches");
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Verification failed - index '{}' holds {} documents, expected {}",
            report.index_name,
            report.actual,
            report.expected
        ))
    }
}
