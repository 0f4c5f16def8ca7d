//! Run configuration.

use crate::error::PopulateError;
use loadtest_populate::{DEFAULT_BATCH_SIZE, DEFAULT_ROW_COUNT};
use search_client::{ClientConfig, DEFAULT_BASE_URL};
use search_types::validate_index_name;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Index populated when no name is given.
pub const DEFAULT_INDEX_NAME: &str = "large_dataset";

/// Largest batch the service accepts in one ingestion request.
pub const MAX_DOCUMENTS_PER_REQUEST: usize = 1000;

/// Batches generated ahead of the uploader by default.
pub const DEFAULT_PIPELINE_DEPTH: usize = 2;

/// Everything one populate run needs, passed to the populator at construction.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    /// Service base URL
    pub base_url: String,
    /// Index to (re)create and fill
    pub index_name: String,
    /// Documents to generate
    pub total_documents: u64,
    /// Documents per ingestion request
    pub batch_size: usize,
    /// Generation seed; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Bearer token for protected endpoints
    pub api_token: Option<String>,
    /// Per-request timeout
    pub request_timeout: Option<Duration>,
    /// Batches buffered between generation and upload; 0 generates inline
    pub pipeline_depth: usize,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            index_name: DEFAULT_INDEX_NAME.to_string(),
            total_documents: DEFAULT_ROW_COUNT,
            batch_size: DEFAULT_BATCH_SIZE,
            seed: None,
            api_token: None,
            request_timeout: None,
            pipeline_depth: DEFAULT_PIPELINE_DEPTH,
        }
    }
}

impl PopulateConfig {
    /// Check the configuration and return the batch size as a non-zero value.
    pub fn validate(&self) -> Result<NonZeroUsize, PopulateError> {
        validate_index_name(&self.index_name)
            .map_err(|e| PopulateError::InvalidConfig(e.to_string()))?;

        let batch_size = NonZeroUsize::new(self.batch_size).ok_or_else(|| {
            PopulateError::InvalidConfig("batch size must be at least 1".to_string())
        })?;

        if batch_size.get() > MAX_DOCUMENTS_PER_REQUEST {
            tracing::warn!(
                "Batch size {} exceeds the service limit of {} documents per request; \
                 those batches will be rejected",
                batch_size,
                MAX_DOCUMENTS_PER_REQUEST
            );
        }

        Ok(batch_size)
    }

    /// HTTP client settings derived from this configuration.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.base_url)
            .with_api_token(self.api_token.clone())
            .with_timeout(self.request_timeout)
    }

    /// Number of batches this run submits.
    pub fn batch_count(&self) -> u64 {
        match self.batch_size {
            0 => 0,
            size => self.total_documents.div_ceil(size as u64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_loader_constants() {
        let config = PopulateConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.index_name, "large_dataset");
        assert_eq!(config.total_documents, 10_000);
        assert_eq!(config.batch_size, 1000);
        assert_eq!(config.batch_count(), 10);
    }

    #[test]
    fn test_validate_ok() {
        let config = PopulateConfig::default();
        assert_eq!(config.validate().unwrap().get(), 1000);
    }

    #[test]
    fn test_validate_zero_batch_size() {
        let config = PopulateConfig {
            batch_size: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PopulateError::InvalidConfig(_)));
        assert!(err.to_string().contains("batch size"));
    }

    #[test]
    fn test_validate_bad_index_name() {
        let config = PopulateConfig {
            index_name: "9lives".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PopulateError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_oversized_batch_is_allowed() {
        let config = PopulateConfig {
            batch_size: 5000,
            ..Default::default()
        };
        assert_eq!(config.validate().unwrap().get(), 5000);
    }

    #[test]
    fn test_batch_count_rounds_up() {
        let config = PopulateConfig {
            total_documents: 2500,
            batch_size: 1000,
            ..Default::default()
        };
        assert_eq!(config.batch_count(), 3);
    }

    #[test]
    fn test_client_config() {
        let config = PopulateConfig {
            api_token: Some("t".into()),
            request_timeout: Some(Duration::from_secs(5)),
            ..Default::default()
        };
        let client = config.client_config();
        assert_eq!(client.base_url, "http://localhost:3000");
        assert_eq!(client.api_token.as_deref(), Some("t"));
        assert_eq!(client.timeout, Some(Duration::from_secs(5)));
    }
}
