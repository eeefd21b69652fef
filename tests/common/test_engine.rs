use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use uns_application::ports::{RegistryBackend, ResolutionCache};
use uns_application::services::ResolutionStats;
use uns_application::use_cases::{
    ClearCacheUseCase, GetResolverStatsUseCase, ListNetworksUseCase, RegisterNetworkUseCase,
    ResolveAddressUseCase, UpdateNetworkUseCase,
};
use uns_domain::config::RegistryConfig;
use uns_domain::{Config, DomainError, NetworkRecord};
use uns_infrastructure::registry::build_registries;
use uns_infrastructure::resolution::resolver::ResolverConfig;
use uns_infrastructure::{Ed25519RecordVerifier, HttpRemoteResolver, ResolverBuilder, UnsCache};

/// Counts lookups on a wrapped registry.
pub struct CountingBackend {
    inner: Arc<dyn RegistryBackend>,
    lookups: AtomicUsize,
}

impl CountingBackend {
    pub fn new(inner: Arc<dyn RegistryBackend>) -> Self {
        Self {
            inner,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistryBackend for CountingBackend {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(network).await
    }

    async fn register(&self, record: NetworkRecord) -> Result<(), DomainError> {
        self.inner.register(record).await
    }

    async fn update(&self, record: NetworkRecord) -> Result<(), DomainError> {
        self.inner.update(record).await
    }

    async fn networks(&self) -> Vec<String> {
        self.inner.networks().await
    }
}

/// The engine wired the way the `uns` binary wires it, with every
/// configured registry wrapped in a [`CountingBackend`].
pub struct TestEngine {
    pub registries: Vec<Arc<CountingBackend>>,
    pub cache: Arc<UnsCache>,
    pub resolve: ResolveAddressUseCase,
    pub clear_cache: ClearCacheUseCase,
    pub get_stats: GetResolverStatsUseCase,
    pub list_networks: ListNetworksUseCase,
    pub register: RegisterNetworkUseCase,
    pub update: UpdateNetworkUseCase,
}

impl TestEngine {
    pub fn total_lookups(&self) -> usize {
        self.registries.iter().map(|r| r.lookups()).sum()
    }
}

pub struct TestEngineBuilder {
    config: Config,
}

impl TestEngineBuilder {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.registries.clear();
        Self { config }
    }

    pub fn with_registry(mut self, registry: RegistryConfig) -> Self {
        self.config.registries.push(registry);
        self
    }

    pub fn with_cache_ttl(mut self, ttl_secs: u64) -> Self {
        self.config.cache.ttl_secs = ttl_secs;
        self
    }

    pub fn with_resolver_timeout(mut self, timeout_ms: u64) -> Self {
        self.config.resolver.resolver_timeout_ms = timeout_ms;
        self
    }

    pub fn build(self) -> TestEngine {
        self.config.validate().unwrap();

        let registries: Vec<Arc<CountingBackend>> = build_registries(&self.config.registries)
            .unwrap()
            .into_iter()
            .map(|r| Arc::new(CountingBackend::new(r)))
            .collect();
        let chain: Vec<Arc<dyn RegistryBackend>> = registries
            .iter()
            .map(|r| Arc::clone(r) as Arc<dyn RegistryBackend>)
            .collect();

        let cache = Arc::new(UnsCache::new(Duration::from_secs(self.config.cache.ttl_secs)));
        let cache_port: Arc<dyn ResolutionCache> = cache.clone();

        let resolver = ResolverBuilder::new(Arc::new(HttpRemoteResolver::new()))
            .with_registries(chain.clone())
            .with_config(ResolverConfig::from(&self.config.resolver))
            .with_cache(Arc::clone(&cache_port))
            .build();

        let stats = Arc::new(ResolutionStats::new());
        let verifier = Arc::new(Ed25519RecordVerifier::new());

        TestEngine {
            resolve: ResolveAddressUseCase::new(resolver, stats.clone())
                .with_deadline(self.config.resolver.resolve_timeout()),
            clear_cache: ClearCacheUseCase::new(Arc::clone(&cache_port)),
            get_stats: GetResolverStatsUseCase::new(Arc::clone(&cache_port), stats),
            list_networks: ListNetworksUseCase::new(chain.clone()),
            register: RegisterNetworkUseCase::new(Arc::clone(&chain[0]), verifier.clone())
                .with_cache(Arc::clone(&cache_port)),
            update: UpdateNetworkUseCase::new(Arc::clone(&chain[0]), verifier)
                .with_cache(cache_port),
            registries,
            cache,
        }
    }
}
