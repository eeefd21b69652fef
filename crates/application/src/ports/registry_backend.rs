use async_trait::async_trait;
use uns_domain::{DomainError, NetworkRecord};
use std::sync::Arc;

/// A backend that can look up network records by name.
///
/// `Ok(None)` means the backend answered and has no record. An `Err` means
/// the backend could not answer; the engine treats both as "try the next
/// registry".
#[async_trait]
pub trait RegistryBackend: Send + Sync {
    fn name(&self) -> &str;

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError>;

    async fn register(&self, _record: NetworkRecord) -> Result<(), DomainError> {
        Err(DomainError::ReadOnlyRegistry(self.name().to_string()))
    }

    async fn update(&self, _record: NetworkRecord) -> Result<(), DomainError> {
        Err(DomainError::ReadOnlyRegistry(self.name().to_string()))
    }

    /// Names of every network the backend can enumerate.
    async fn networks(&self) -> Vec<String> {
        Vec::new()
    }
}
