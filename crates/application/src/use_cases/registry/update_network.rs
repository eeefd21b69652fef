use std::sync::Arc;
use tracing::{info, instrument};
use uns_domain::{DomainError, NetworkRecord};

use crate::ports::{RecordVerifier, RegistryBackend, ResolutionCache};

/// Replaces an existing record. The owner cannot change and the new record
/// must carry a valid signature from that owner.
pub struct UpdateNetworkUseCase {
    registry: Arc<dyn RegistryBackend>,
    verifier: Arc<dyn RecordVerifier>,
    cache: Option<Arc<dyn ResolutionCache>>,
}

impl UpdateNetworkUseCase {
    pub fn new(registry: Arc<dyn RegistryBackend>, verifier: Arc<dyn RecordVerifier>) -> Self {
        Self {
            registry,
            verifier,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResolutionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    #[instrument(skip(self, record), fields(network = %record.network))]
    pub async fn execute(&self, record: NetworkRecord) -> Result<(), DomainError> {
        record.validate()?;

        let current = self
            .registry
            .lookup(&record.network)
            .await?
            .ok_or_else(|| DomainError::NetworkNotFound(record.network.clone()))?;

        if current.owner != record.owner {
            return Err(DomainError::OwnerMismatch(record.network.clone()));
        }

        self.verifier.verify(&record)?;

        let network = record.network.clone();
        self.registry.update(record).await?;

        let invalidated = self
            .cache
            .as_ref()
            .map(|cache| cache.remove_network(&network))
            .unwrap_or(0);

        info!(network = %network, invalidated, "Network record updated");
        Ok(())
    }
}
