use std::sync::Arc;
use tracing::{info, instrument};
use uns_domain::{DomainError, NetworkRecord};

use crate::ports::{RecordVerifier, RegistryBackend, ResolutionCache};

/// Publishes a new, signed network record into a writable registry.
pub struct RegisterNetworkUseCase {
    registry: Arc<dyn RegistryBackend>,
    verifier: Arc<dyn RecordVerifier>,
    cache: Option<Arc<dyn ResolutionCache>>,
}

impl RegisterNetworkUseCase {
    pub fn new(registry: Arc<dyn RegistryBackend>, verifier: Arc<dyn RecordVerifier>) -> Self {
        Self {
            registry,
            verifier,
            cache: None,
        }
    }

    /// Drop cached resolutions of the network once it is registered, since a
    /// lower-priority registry may have answered for it before.
    pub fn with_cache(mut self, cache: Arc<dyn ResolutionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    #[instrument(skip(self, record), fields(network = %record.network))]
    pub async fn execute(&self, record: NetworkRecord) -> Result<(), DomainError> {
        record.validate()?;
        self.verifier.verify(&record)?;

        let network = record.network.clone();
        self.registry.register(record).await?;

        let invalidated = self
            .cache
            .as_ref()
            .map(|cache| cache.remove_network(&network))
            .unwrap_or(0);

        info!(
            network = %network,
            registry = self.registry.name(),
            invalidated,
            "Network registered"
        );
        Ok(())
    }
}
