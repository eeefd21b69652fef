use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use uns_domain::{DomainError, UnsAddress};

use crate::ports::{AddressResolver, Resolution};
use crate::services::ResolutionStats;

const DEFAULT_DEADLINE: Duration = Duration::from_secs(10);

/// Result of `execute_with_metadata`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionMetadata {
    pub address: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub cache_hit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ResolutionExtra>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionExtra {
    pub network: String,
    pub subdomain: Option<String>,
    pub resource_path: String,
    pub cache_hit: bool,
    pub registry: Option<String>,
    pub endpoint: Option<String>,
}

/// Entry point for turning a UNS address into a URL.
///
/// Counts every call in [`ResolutionStats`], bounds it by a deadline and
/// optionally races it against a cancellation token. A cancelled or timed-out
/// call drops the in-flight resolution, so nothing is written to the cache.
pub struct ResolveAddressUseCase {
    resolver: Arc<dyn AddressResolver>,
    stats: Arc<ResolutionStats>,
    deadline: Duration,
}

impl ResolveAddressUseCase {
    pub fn new(resolver: Arc<dyn AddressResolver>, stats: Arc<ResolutionStats>) -> Self {
        Self {
            resolver,
            stats,
            deadline: DEFAULT_DEADLINE,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, address: &str) -> Result<String, DomainError> {
        let resolution = self.run(address, None).await?;
        Ok(resolution.url.to_string())
    }

    #[instrument(skip(self, cancel))]
    pub async fn execute_cancellable(
        &self,
        address: &str,
        cancel: &CancellationToken,
    ) -> Result<String, DomainError> {
        let resolution = self.run(address, Some(cancel)).await?;
        Ok(resolution.url.to_string())
    }

    #[instrument(skip(self))]
    pub async fn execute_with_metadata(
        &self,
        address: &str,
        include_extra: bool,
    ) -> Result<ResolutionMetadata, DomainError> {
        let resolution = self.run(address, None).await?;

        let extra = if include_extra {
            Some(Self::extra_for(address, &resolution)?)
        } else {
            None
        };

        Ok(ResolutionMetadata {
            address: address.to_string(),
            url: resolution.url.to_string(),
            timestamp: resolution.timestamp,
            cache_hit: resolution.cache_hit,
            extra,
        })
    }

    async fn run(
        &self,
        address: &str,
        cancel: Option<&CancellationToken>,
    ) -> Result<Resolution, DomainError> {
        self.stats.record_attempt();

        let bounded = async {
            tokio::time::timeout(self.deadline, self.resolver.resolve(address))
                .await
                .unwrap_or(Err(DomainError::Timeout))
        };

        let result = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(DomainError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        };

        match &result {
            Ok(resolution) => {
                self.stats.record_success(resolution.cache_hit);
                debug!(
                    address = %address,
                    url = %resolution.url,
                    cache_hit = resolution.cache_hit,
                    "Address resolved"
                );
            }
            Err(e) => {
                self.stats.record_failure();
                warn!(address = %address, kind = e.kind(), error = %e, "Resolution failed");
            }
        }

        result
    }

    fn extra_for(address: &str, resolution: &Resolution) -> Result<ResolutionExtra, DomainError> {
        let parsed = UnsAddress::parse(address)?;
        Ok(ResolutionExtra {
            network: parsed.network,
            subdomain: parsed.subdomain,
            resource_path: parsed.resource_path,
            cache_hit: resolution.cache_hit,
            registry: resolution.registry.as_deref().map(str::to_string),
            endpoint: resolution.endpoint.as_deref().map(str::to_string),
        })
    }
}
