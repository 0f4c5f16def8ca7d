//! Populate command runner.

use anyhow::Context;
use loadtest_populate_search::{RunReport, SearchPopulateArgs, SearchPopulator};
use search_client::HttpSearchClient;

use super::{mask_api_token, mask_url_credentials};

/// Run the populate command: recreate the index and fill it with synthetic documents.
///
/// Rejected batches are logged and written to the report but do not fail the
/// command; only errors before ingestion starts do.
pub async fn run_populate(args: SearchPopulateArgs) -> anyhow::Result<()> {
    let config = args.to_config();

    tracing::info!(
        "Search service: {} (api token: {})",
        mask_url_credentials(&config.base_url),
        mask_api_token(config.api_token.as_deref())
    );

    let client = HttpSearchClient::new(config.client_config()).with_context(|| {
        format!(
            "Invalid search service URL '{}'",
            mask_url_credentials(&config.base_url)
        )
    })?;
    let mut populator = SearchPopulator::new(client, config);

    if args.common.dry_run {
        populator
            .dry_run()
            .context("Invalid populate configuration")?;
        tracing::info!("[DRY-RUN] Configuration validated successfully");
        return Ok(());
    }

    tracing::info!(
        "Populating index '{}' with {} documents in batches of {} (seed={:?})",
        args.index_name,
        args.common.row_count,
        args.common.batch_size,
        args.common.seed
    );

    let report = populator
        .run()
        .await
        .with_context(|| format!("Failed to populate index '{}'", args.index_name))?;

    log_report(&report);

    if let Some(path) = &args.report_file {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write run report to {path:?}"))?;
        tracing::info!("Run report written to {:?}", path);
    }

    tracing::info!("Populate completed");
    Ok(())
}

fn log_report(report: &RunReport) {
    tracing::info!(
        "Index '{}': {} of {} documents accepted in {} batches ({:.2}s, {:.2} docs/sec)",
        report.index_name,
        report.documents_accepted,
        report.total_documents,
        report.batch_count,
        report.elapsed_seconds,
        report.docs_per_second
    );
    for failure in &report.failed_batches {
        tracing::warn!(
            "Batch {}..{} failed: {}",
            failure.start_index,
            failure.end_index,
            failure.detail
        );
    }
}
