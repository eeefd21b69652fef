use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use uns_application::ports::{AddressResolver, Resolution, ResolutionCache};
use uns_domain::{cache_key, DomainError};

/// Cache decorator for an address resolver
///
/// A live entry short-circuits all parsing and registry work. Only
/// successful resolutions are stored; errors are never cached. A result is
/// dropped instead of stored when the cache was invalidated while it was
/// being resolved.
pub struct CachedResolver {
    inner: Arc<dyn AddressResolver>,
    cache: Arc<dyn ResolutionCache>,
}

impl CachedResolver {
    pub fn new(inner: Arc<dyn AddressResolver>, cache: Arc<dyn ResolutionCache>) -> Self {
        Self { inner, cache }
    }

    fn check_cache(&self, address: &str, key: &str) -> Option<Resolution> {
        self.cache.get(key).map(|url| {
            debug!(address = %address, "Cache HIT");
            Resolution::new(address, url, true)
        })
    }
}

#[async_trait]
impl AddressResolver for CachedResolver {
    async fn resolve(&self, address: &str) -> Result<Resolution, DomainError> {
        let key = cache_key(address);

        if let Some(cached) = self.check_cache(address, &key) {
            return Ok(cached);
        }

        debug!(address = %address, "Cache MISS");

        let generation = self.cache.generation();
        let resolution = self.inner.resolve(address).await?;
        self.cache
            .insert_if_generation(&key, Arc::clone(&resolution.url), generation);
        Ok(resolution)
    }

    fn try_cache(&self, address: &str) -> Option<Resolution> {
        self.check_cache(address, &cache_key(address))
    }
}
