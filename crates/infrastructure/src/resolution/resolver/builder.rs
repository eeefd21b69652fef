use super::cache_layer::CachedResolver;
use super::config::ResolverConfig;
use super::core::CoreResolver;
use std::sync::Arc;
use tracing::info;
use uns_application::ports::{AddressResolver, RegistryBackend, RemoteResolver, ResolutionCache};

pub struct ResolverBuilder {
    remote: Arc<dyn RemoteResolver>,
    registries: Vec<Arc<dyn RegistryBackend>>,
    config: ResolverConfig,
    cache: Option<Arc<dyn ResolutionCache>>,
}

impl ResolverBuilder {
    pub fn new(remote: Arc<dyn RemoteResolver>) -> Self {
        Self {
            remote,
            registries: Vec::new(),
            config: ResolverConfig::default(),
            cache: None,
        }
    }

    /// Append a registry; registries are queried in the order they are added.
    pub fn with_registry(mut self, registry: Arc<dyn RegistryBackend>) -> Self {
        self.registries.push(registry);
        self
    }

    pub fn with_registries(mut self, registries: Vec<Arc<dyn RegistryBackend>>) -> Self {
        self.registries.extend(registries);
        self
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_cache(mut self, cache: Arc<dyn ResolutionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn build(self) -> Arc<dyn AddressResolver> {
        info!(
            registries = self.registries.len(),
            cache = self.cache.is_some(),
            registry_timeout_ms = self.config.registry_timeout.as_millis() as u64,
            resolver_timeout_ms = self.config.resolver_timeout.as_millis() as u64,
            "Building UNS resolver"
        );

        let mut resolver: Arc<dyn AddressResolver> =
            Arc::new(CoreResolver::new(self.registries, self.remote, self.config));

        if let Some(cache) = self.cache {
            resolver = Arc::new(CachedResolver::new(resolver, cache));
        }

        resolver
    }
}
