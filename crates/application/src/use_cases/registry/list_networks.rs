use std::sync::Arc;

use crate::ports::RegistryBackend;

pub struct ListNetworksUseCase {
    registries: Vec<Arc<dyn RegistryBackend>>,
}

impl ListNetworksUseCase {
    pub fn new(registries: Vec<Arc<dyn RegistryBackend>>) -> Self {
        Self { registries }
    }

    /// `(registry name, network names)` for every registry, in chain order.
    pub async fn execute(&self) -> Vec<(String, Vec<String>)> {
        let mut listing = Vec::with_capacity(self.registries.len());
        for registry in &self.registries {
            let mut networks = registry.networks().await;
            networks.sort();
            listing.push((registry.name().to_string(), networks));
        }
        listing
    }
}
