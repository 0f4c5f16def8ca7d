//! Batched ingestion.
//!
//! The uploader submits batches strictly in order. A rejected or failed batch
//! is recorded and the next batch is submitted anyway; nothing is retried.

use crate::batch::{Batch, Batches};
use search_client::SearchService;
use search_types::Document;
use serde::Serialize;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Outcome of one submitted batch, reported as soon as the request returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProgress {
    /// Zero-based batch ordinal
    pub batch_number: u64,
    /// Position of the first document
    pub start_index: u64,
    /// One past the position of the last document
    pub end_index: u64,
    /// Documents submitted so far, this batch included
    pub submitted: u64,
    /// Whether the service accepted the batch
    pub succeeded: bool,
}

/// Receives one observation per submitted batch, in submission order.
pub trait ProgressObserver: Send + Sync {
    fn on_batch(&self, progress: &BatchProgress);
}

/// Default observer: one log line per batch.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_batch(&self, progress: &BatchProgress) {
        if progress.succeeded {
            info!(
                "Indexed docs {} to {} ({} submitted)",
                progress.start_index, progress.end_index, progress.submitted
            );
        }
    }
}

/// A batch the service did not accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    /// Position of the first document in the batch
    pub start_index: u64,
    /// One past the position of the last document
    pub end_index: u64,
    /// HTTP status, absent when no response was received
    pub status: Option<u16>,
    /// Response body, or the transport error
    pub detail: String,
}

/// Accumulated outcome of an upload.
#[derive(Debug, Clone, Default)]
pub struct UploadSummary {
    /// Batches submitted
    pub batch_count: u64,
    /// Documents submitted
    pub documents_submitted: u64,
    /// Documents in accepted batches
    pub documents_accepted: u64,
    /// Time spent waiting on ingestion requests
    pub upload_duration: Duration,
    /// Rejected batches in submission order
    pub failed_batches: Vec<BatchFailure>,
}

/// Submits batches of documents to one index.
pub struct BatchUploader<'a, S: SearchService + ?Sized> {
    service: &'a S,
    index_name: String,
    batch_size: NonZeroUsize,
    observer: Arc<dyn ProgressObserver>,
}

impl<'a, S: SearchService + ?Sized> BatchUploader<'a, S> {
    pub fn new(service: &'a S, index_name: impl Into<String>, batch_size: NonZeroUsize) -> Self {
        Self {
            service,
            index_name: index_name.into(),
            batch_size,
            observer: Arc::new(LogProgress),
        }
    }

    /// Replace the default logging observer.
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Group `documents` into batches and submit each in order.
    pub async fn upload<I>(&self, documents: I) -> UploadSummary
    where
        I: IntoIterator<Item = Document>,
    {
        let mut summary = UploadSummary::default();
        for batch in Batches::new(documents.into_iter(), self.batch_size) {
            self.submit(batch, &mut summary).await;
        }
        summary
    }

    /// Submit batches as they arrive on `batches` until the sender is dropped.
    pub async fn upload_from(&self, mut batches: mpsc::Receiver<Batch>) -> UploadSummary {
        let mut summary = UploadSummary::default();
        while let Some(batch) = batches.recv().await {
            self.submit(batch, &mut summary).await;
        }
        summary
    }

    async fn submit(&self, batch: Batch, summary: &mut UploadSummary) {
        let request_start = Instant::now();
        let outcome = self
            .service
            .add_documents(&self.index_name, &batch.documents)
            .await;
        summary.upload_duration += request_start.elapsed();

        let failure = match outcome {
            Ok(response) if response.is_ok_or_created() => None,
            Ok(response) => Some(BatchFailure {
                start_index: batch.start_index,
                end_index: batch.end_index(),
                status: Some(response.status),
                detail: response.body,
            }),
            Err(e) => Some(BatchFailure {
                start_index: batch.start_index,
                end_index: batch.end_index(),
                status: None,
                detail: e.to_string(),
            }),
        };

        let batch_size = batch.len() as u64;
        summary.documents_submitted += batch_size;
        let progress = BatchProgress {
            batch_number: summary.batch_count,
            start_index: batch.start_index,
            end_index: batch.end_index(),
            submitted: summary.documents_submitted,
            succeeded: failure.is_none(),
        };
        summary.batch_count += 1;

        match failure {
            None => summary.documents_accepted += batch_size,
            Some(failure) => {
                warn!(
                    "Failed to index batch starting at {}: {}",
                    failure.start_index, failure.detail
                );
                summary.failed_batches.push(failure);
            }
        }

        self.observer.on_batch(&progress);
    }
}
