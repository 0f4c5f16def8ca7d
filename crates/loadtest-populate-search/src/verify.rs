//! Post-run document count check.

use crate::error::PopulateError;
use search_client::SearchService;
use serde::Serialize;
use tracing::{info, warn};

/// Expected versus reported document count for one index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub index_name: String,
    pub expected: u64,
    pub actual: u64,
}

impl VerifyReport {
    pub fn is_match(&self) -> bool {
        self.expected == self.actual
    }
}

/// Read the index's document count and compare it with `expected`.
pub async fn verify_document_count<S>(
    service: &S,
    index_name: &str,
    expected: u64,
) -> Result<VerifyReport, PopulateError>
where
    S: SearchService + ?Sized,
{
    let stats = service
        .index_stats(index_name)
        .await
        .map_err(|source| PopulateError::Verify {
            index: index_name.to_string(),
            source,
        })?;

    let report = VerifyReport {
        index_name: index_name.to_string(),
        expected,
        actual: stats.document_count,
    };

    if report.is_match() {
        info!("Index '{index_name}' holds {} documents as expected", report.actual);
    } else {
        warn!(
            "Index '{index_name}' holds {} documents, expected {}",
            report.actual, report.expected
        );
    }

    Ok(report)
}
