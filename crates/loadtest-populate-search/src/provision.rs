//! Index provisioning: delete-then-create reset.

use crate::error::ProvisionError;
use search_client::{SearchService, ServiceResponse};
use search_types::IndexDescriptor;
use tracing::{debug, info, warn};

/// Body marker the service uses when a named index does not exist.
const INDEX_NOT_FOUND: &str = "Index not found";

/// How a delete response is read before the index is re-created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// An existing index was removed
    Deleted,
    /// There was nothing to remove
    NotFound,
    /// Any other answer; logged and otherwise ignored
    Failed,
}

impl DeleteOutcome {
    /// Classify a delete response. The service reports a missing index as
    /// a 404 or as an error status whose body says `Index not found`.
    pub fn classify(response: &ServiceResponse) -> Self {
        if response.is_ok_or_created() {
            Self::Deleted
        } else if response.status == 404 || response.body.contains(INDEX_NOT_FOUND) {
            Self::NotFound
        } else {
            Self::Failed
        }
    }
}

/// Drop any index named like `descriptor` and create it afresh.
///
/// The delete outcome never matters: a missing index, an error status and a
/// transport failure are all ignored. Only the create response decides the
/// result. Concurrent provisioning of the same name races.
pub async fn provision<S>(service: &S, descriptor: &IndexDescriptor) -> Result<(), ProvisionError>
where
    S: SearchService + ?Sized,
{
    let index = descriptor.name.as_str();
    info!("Creating index '{index}'...");

    match service.delete_index(index).await {
        Ok(response) => match DeleteOutcome::classify(&response) {
            DeleteOutcome::Deleted => debug!("Deleted existing index '{index}'"),
            DeleteOutcome::NotFound => debug!("No existing index '{index}' to delete"),
            DeleteOutcome::Failed => warn!(
                "Ignoring delete failure for index '{index}' (status {}): {}",
                response.status, response.body
            ),
        },
        Err(e) => {
            warn!("Ignoring delete failure for index '{index}': {e}");
        }
    }

    let response = service
        .create_index(descriptor)
        .await
        .map_err(|source| ProvisionError::Transport {
            index: index.to_string(),
            source,
        })?;

    if !response.is_ok_or_created() {
        return Err(ProvisionError::Rejected {
            index: index.to_string(),
            status: response.status,
            body: response.body,
        });
    }

    info!("Index '{index}' created successfully");
    Ok(())
}
