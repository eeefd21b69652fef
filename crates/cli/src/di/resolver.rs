use std::sync::Arc;
use tracing::info;
use uns_application::ports::{AddressResolver, RegistryBackend, ResolutionCache};
use uns_domain::config::RegistryKind;
use uns_domain::Config;
use uns_infrastructure::registry::build_registries;
use uns_infrastructure::resolution::resolver::ResolverConfig;
use uns_infrastructure::{HttpRemoteResolver, ResolverBuilder, UnsCache};

/// Registry chain, cache and the assembled resolver stack.
pub struct ResolverServices {
    pub registries: Vec<Arc<dyn RegistryBackend>>,
    /// First static registry of the chain; target of `register`.
    pub writable: Option<Arc<dyn RegistryBackend>>,
    pub cache: Option<Arc<UnsCache>>,
    pub resolver: Arc<dyn AddressResolver>,
}

impl ResolverServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registries = build_registries(&config.registries)?;

        let writable = config
            .registries
            .iter()
            .position(|r| r.kind == RegistryKind::Static)
            .map(|idx| Arc::clone(&registries[idx]));

        let cache = config
            .cache
            .enabled
            .then(|| Arc::new(UnsCache::new(config.cache.ttl())));

        let mut builder = ResolverBuilder::new(Arc::new(HttpRemoteResolver::new()))
            .with_registries(registries.clone())
            .with_config(ResolverConfig::from(&config.resolver));
        if let Some(cache) = &cache {
            builder = builder.with_cache(Arc::clone(cache) as Arc<dyn ResolutionCache>);
        }
        let resolver = builder.build();

        info!(
            registries = registries.len(),
            writable = writable.as_ref().map(|r| r.name()).unwrap_or("none"),
            "Resolver services ready"
        );

        Ok(Self {
            registries,
            writable,
            cache,
            resolver,
        })
    }

    pub fn cache_port(&self) -> Arc<dyn ResolutionCache> {
        match &self.cache {
            Some(cache) => Arc::clone(cache) as Arc<dyn ResolutionCache>,
            None => Arc::new(UnsCache::new(std::time::Duration::ZERO)),
        }
    }
}
