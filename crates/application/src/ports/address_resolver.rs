use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uns_domain::DomainError;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Resolution {
    pub address: Arc<str>,
    pub url: Arc<str>,
    pub timestamp: DateTime<Utc>,
    pub cache_hit: bool,
    /// Registry that supplied the network record; absent on cache hits.
    pub registry: Option<Arc<str>>,
    /// Resolver endpoint that produced the URL; absent for direct mapping.
    pub endpoint: Option<Arc<str>>,
}

impl Resolution {
    pub fn new(address: &str, url: impl Into<Arc<str>>, cache_hit: bool) -> Self {
        Self {
            address: Arc::from(address),
            url: url.into(),
            timestamp: Utc::now(),
            cache_hit,
            registry: None,
            endpoint: None,
        }
    }

    pub fn with_registry(mut self, registry: impl Into<Arc<str>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<Arc<str>>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, address: &str) -> Result<Resolution, DomainError>;

    fn try_cache(&self, _address: &str) -> Option<Resolution> {
        None
    }
}
