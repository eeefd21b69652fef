use async_trait::async_trait;
use uns_domain::DomainError;
use std::time::Duration;

/// Client for `http(s)` resolver endpoints listed in a network record.
#[async_trait]
pub trait RemoteResolver: Send + Sync {
    /// Ask `endpoint` for the URL of `path` within `network`.
    ///
    /// Fails with `ResolverError` on a non-success reply or a reply without a
    /// URL, and with `Timeout` when `timeout` elapses.
    async fn resolve_remote(
        &self,
        endpoint: &str,
        network: &str,
        path: &str,
        timeout: Duration,
    ) -> Result<String, DomainError>;
}
