//! Final run report.

use crate::error::PopulateError;
use crate::upload::{BatchFailure, UploadSummary};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

/// Summary of one populate run, computed once ingestion ends.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Index that was populated
    pub index_name: String,
    /// Documents the run set out to ingest (not reduced by failures)
    pub total_documents: u64,
    /// Documents in batches the service accepted
    pub documents_accepted: u64,
    /// Batches submitted
    pub batch_count: u64,
    /// Wall-clock ingestion time
    pub elapsed_seconds: f64,
    /// `total_documents / elapsed_seconds`
    pub docs_per_second: f64,
    /// Time spent waiting on ingestion requests
    pub upload_seconds: f64,
    /// Rejected batches in submission order
    pub failed_batches: Vec<BatchFailure>,
}

impl RunReport {
    pub fn new(
        index_name: impl Into<String>,
        total_documents: u64,
        elapsed: Duration,
        summary: UploadSummary,
    ) -> Self {
        let elapsed_seconds = elapsed.as_secs_f64();
        let docs_per_second = if elapsed_seconds > 0.0 {
            total_documents as f64 / elapsed_seconds
        } else {
            0.0
        };

        Self {
            index_name: index_name.into(),
            total_documents,
            documents_accepted: summary.documents_accepted,
            batch_count: summary.batch_count,
            elapsed_seconds,
            docs_per_second,
            upload_seconds: summary.upload_duration.as_secs_f64(),
            failed_batches: summary.failed_batches,
        }
    }

    /// Whether every batch was accepted.
    pub fn is_success(&self) -> bool {
        self.failed_batches.is_empty()
    }

    /// Start indices of the rejected batches.
    pub fn failed_start_indices(&self) -> Vec<u64> {
        self.failed_batches.iter().map(|f| f.start_index).collect()
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), PopulateError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
