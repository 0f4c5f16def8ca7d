//! Run orchestration: liveness, provisioning, ingestion, report.

use crate::batch::{plan_batches, Batches};
use crate::config::PopulateConfig;
use crate::error::PopulateError;
use crate::provision::provision;
use crate::report::RunReport;
use crate::upload::{BatchUploader, LogProgress, ProgressObserver};
use loadtest_generator::DocumentGenerator;
use search_client::{HttpSearchClient, SearchService};
use search_types::IndexDescriptor;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Where a run currently is. `Completed` and `Aborted` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    CheckingService,
    Provisioning,
    Ingesting,
    Completed,
    Aborted,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not-started",
            Self::CheckingService => "checking-service",
            Self::Provisioning => "provisioning",
            Self::Ingesting => "ingesting",
            Self::Completed => "completed",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Drives one populate run against a [`SearchService`].
///
/// # Example
///
/// ```ignore
/// let mut populator = SearchPopulator::new(client, config);
/// let report = populator.run().await?;
/// ```
pub struct SearchPopulator<S: SearchService> {
    service: S,
    config: PopulateConfig,
    generator: DocumentGenerator,
    observer: Arc<dyn ProgressObserver>,
    state: RunState,
}

impl<S: SearchService> SearchPopulator<S> {
    /// Create a new populator for the given service and configuration.
    pub fn new(service: S, config: PopulateConfig) -> Self {
        let generator = DocumentGenerator::new(config.seed);
        Self {
            service,
            config,
            generator,
            observer: Arc::new(LogProgress),
            state: RunState::NotStarted,
        }
    }

    /// Replace the default logging progress observer.
    pub fn with_observer(mut self, observer: Arc<dyn ProgressObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &PopulateConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// The schema this run provisions.
    pub fn descriptor(&self) -> IndexDescriptor {
        IndexDescriptor::product_catalog(&self.config.index_name)
    }

    fn transition(&mut self, next: RunState) {
        tracing::debug!("Run state: {} -> {}", self.state, next);
        self.state = next;
    }

    /// Validate the configuration and log what a run would do, without any request.
    pub fn dry_run(&self) -> Result<(), PopulateError> {
        let batch_size = self.config.validate()?;
        let descriptor = self.descriptor();

        info!(
            "[DRY-RUN] Would populate index '{}' at {} with {} documents in batches of {}",
            self.config.index_name, self.config.base_url, self.config.total_documents, batch_size
        );
        info!(
            "[DRY-RUN] Index schema: {}",
            serde_json::to_string(&descriptor)?
        );
        for range in plan_batches(self.config.total_documents, batch_size) {
            info!("[DRY-RUN] Batch {}..{}", range.start, range.end);
        }
        Ok(())
    }

    /// Run liveness check, provisioning and ingestion, and return the report.
    ///
    /// Fails only before ingestion starts: on invalid configuration, an
    /// unreachable service, or a rejected index creation. Batch failures are
    /// carried in the report.
    pub async fn run(&mut self) -> Result<RunReport, PopulateError> {
        let batch_size = match self.config.validate() {
            Ok(size) => size,
            Err(e) => {
                self.transition(RunState::Aborted);
                return Err(e);
            }
        };

        self.transition(RunState::CheckingService);
        if let Err(source) = self.service.health().await {
            self.transition(RunState::Aborted);
            error!(
                "Search service is not running at {}: {}",
                self.config.base_url, source
            );
            return Err(PopulateError::ServiceUnavailable {
                base_url: self.config.base_url.clone(),
                source,
            });
        }

        self.transition(RunState::Provisioning);
        let descriptor = self.descriptor();
        if let Err(e) = provision(&self.service, &descriptor).await {
            self.transition(RunState::Aborted);
            error!("{e}");
            return Err(e.into());
        }

        self.transition(RunState::Ingesting);
        let total = self.config.total_documents;
        info!("Generating and indexing {total} documents...");

        let start_time = Instant::now();
        let documents = self.generator.generate(total);
        let summary = {
            let uploader = BatchUploader::new(&self.service, &self.config.index_name, batch_size)
                .with_observer(self.observer.clone());

            if self.config.pipeline_depth == 0 {
                uploader.upload(documents).await
            } else {
                let (tx, rx) = mpsc::channel(self.config.pipeline_depth);
                let producer = tokio::spawn(async move {
                    for batch in Batches::new(documents, batch_size) {
                        if tx.send(batch).await.is_err() {
                            break;
                        }
                    }
                });

                let summary = uploader.upload_from(rx).await;
                if let Err(e) = producer.await {
                    warn!("Document generation task ended abnormally: {e}");
                }
                summary
            }
        };
        let elapsed = start_time.elapsed();

        self.transition(RunState::Completed);
        let report = RunReport::new(&self.config.index_name, total, elapsed, summary);

        info!(
            "Completed in {:.2} seconds. Average rate: {:.2} docs/sec",
            report.elapsed_seconds, report.docs_per_second
        );
        if !report.is_success() {
            warn!(
                "{} batch(es) failed, starting at {:?}",
                report.failed_batches.len(),
                report.failed_start_indices()
            );
        }

        Ok(report)
    }
}

/// Build an HTTP client from `config` and run a populator with it.
pub async fn run(config: PopulateConfig) -> Result<RunReport, PopulateError> {
    let client = HttpSearchClient::new(config.client_config())?;
    SearchPopulator::new(client, config).run().await
}
