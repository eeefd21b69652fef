use super::config::ResolverConfig;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};
use uns_application::ports::{AddressResolver, RegistryBackend, RemoteResolver, Resolution};
use uns_domain::{DomainError, NetworkRecord, ResolverEndpoint, UnsAddress};

/// Innermost resolver: parse, walk the registry chain, map the record.
pub struct CoreResolver {
    registries: Vec<Arc<dyn RegistryBackend>>,
    remote: Arc<dyn RemoteResolver>,
    config: ResolverConfig,
}

struct MappedUrl {
    url: String,
    endpoint: Option<String>,
}

impl CoreResolver {
    pub fn new(
        registries: Vec<Arc<dyn RegistryBackend>>,
        remote: Arc<dyn RemoteResolver>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            registries,
            remote,
            config,
        }
    }

    /// First record found walking the registries in priority order.
    ///
    /// A registry that errors or times out counts as having no record.
    async fn find_record(
        &self,
        network: &str,
    ) -> Result<(Arc<NetworkRecord>, Arc<str>), DomainError> {
        for registry in &self.registries {
            let lookup = tokio::time::timeout(self.config.registry_timeout, registry.lookup(network));

            match lookup.await {
                Ok(Ok(Some(record))) => {
                    debug!(network = %network, registry = registry.name(), "Network record found");
                    return Ok((record, Arc::from(registry.name())));
                }
                Ok(Ok(None)) => {
                    debug!(network = %network, registry = registry.name(), "No record in registry");
                }
                Ok(Err(e)) => {
                    warn!(
                        network = %network,
                        registry = registry.name(),
                        error = %e,
                        "Registry lookup failed, trying next registry"
                    );
                }
                Err(_) => {
                    warn!(
                        network = %network,
                        registry = registry.name(),
                        timeout_ms = self.config.registry_timeout.as_millis() as u64,
                        "Registry lookup timed out, trying next registry"
                    );
                }
            }
        }

        Err(DomainError::NetworkNotFound(network.to_string()))
    }

    /// Map the address through the record's resolver endpoints in order.
    ///
    /// Remote endpoints that fail fall through to the next endpoint. The
    /// first direct endpoint, or a record without endpoints, maps locally.
    async fn map_record(
        &self,
        record: &NetworkRecord,
        address: &UnsAddress,
    ) -> Result<MappedUrl, DomainError> {
        let mut last_error = None;

        for endpoint in record.endpoints() {
            match endpoint {
                ResolverEndpoint::Remote(uri) => match self.call_remote(uri, address).await {
                    Ok(url) => {
                        return Ok(MappedUrl {
                            url,
                            endpoint: Some(uri.to_string()),
                        })
                    }
                    Err(e) => {
                        warn!(
                            network = %address.network,
                            endpoint = %uri,
                            error = %e,
                            "Resolver endpoint failed, trying next endpoint"
                        );
                        last_error = Some(e);
                    }
                },
                ResolverEndpoint::Direct(_) => return Self::map_direct(record, address),
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Self::map_direct(record, address),
        }
    }

    async fn call_remote(&self, uri: &str, address: &UnsAddress) -> Result<String, DomainError> {
        let timeout = self.config.resolver_timeout;
        tokio::time::timeout(
            timeout,
            self.remote
                .resolve_remote(uri, &address.network, &address.raw_path, timeout),
        )
        .await
        .unwrap_or(Err(DomainError::Timeout))
    }

    fn map_direct(record: &NetworkRecord, address: &UnsAddress) -> Result<MappedUrl, DomainError> {
        record.map_direct(address).map(|url| MappedUrl {
            url,
            endpoint: None,
        })
    }
}

#[async_trait]
impl AddressResolver for CoreResolver {
    async fn resolve(&self, address: &str) -> Result<Resolution, DomainError> {
        let parsed = UnsAddress::parse(address)?;
        let (record, registry) = self.find_record(&parsed.network).await?;
        let mapped = self.map_record(&record, &parsed).await?;

        let mut resolution = Resolution::new(address, mapped.url, false).with_registry(registry);
        if let Some(endpoint) = mapped.endpoint {
            resolution = resolution.with_endpoint(endpoint);
        }
        Ok(resolution)
    }
}
