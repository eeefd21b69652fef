use super::{ContentAddressedRegistry, DnsTxtRegistry, StaticRegistry};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uns_application::ports::RegistryBackend;
use uns_domain::config::{RegistryConfig, RegistryKind};
use uns_domain::{DomainError, NetworkRecord};

/// Read a JSON array of network records.
pub fn load_records(path: &Path) -> Result<Vec<NetworkRecord>, DomainError> {
    let content = std::fs::read(path).map_err(|e| {
        DomainError::InvalidRecord(format!("cannot read records file {}: {e}", path.display()))
    })?;
    serde_json::from_slice(&content).map_err(|e| {
        DomainError::InvalidRecord(format!("cannot parse records file {}: {e}", path.display()))
    })
}

/// Build one registry from its configuration and publish its seed records.
pub fn build_registry(config: &RegistryConfig) -> Result<Arc<dyn RegistryBackend>, DomainError> {
    let records = match &config.records_file {
        Some(path) => load_records(path)?,
        None => Vec::new(),
    };
    let seeded = records.len();

    let registry: Arc<dyn RegistryBackend> = match config.kind {
        RegistryKind::Static => Arc::new(StaticRegistry::from_records(&config.name, records)?),
        RegistryKind::ContentAddressed => {
            let registry = ContentAddressedRegistry::new(&config.name);
            for record in &records {
                registry.publish(record)?;
            }
            Arc::new(registry)
        }
        RegistryKind::DnsTxt => {
            let registry = DnsTxtRegistry::new(&config.name);
            for record in &records {
                registry.publish(record)?;
            }
            Arc::new(registry)
        }
    };

    info!(
        registry = %config.name,
        kind = %config.kind,
        records = seeded,
        "Registry ready"
    );
    Ok(registry)
}

/// Build the whole chain, preserving configured order.
pub fn build_registries(
    configs: &[RegistryConfig],
) -> Result<Vec<Arc<dyn RegistryBackend>>, DomainError> {
    configs.iter().map(build_registry).collect()
}
