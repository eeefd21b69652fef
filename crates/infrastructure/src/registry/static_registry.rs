use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uns_application::ports::RegistryBackend;
use uns_domain::{DomainError, NetworkRecord};

/// Fixed in-memory table of network records.
pub struct StaticRegistry {
    name: String,
    records: DashMap<String, Arc<NetworkRecord>>,
}

impl StaticRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: DashMap::new(),
        }
    }

    /// Build a table from records, rejecting invalid ones.
    pub fn from_records(
        name: impl Into<String>,
        records: impl IntoIterator<Item = NetworkRecord>,
    ) -> Result<Self, DomainError> {
        let registry = Self::new(name);
        for record in records {
            record.validate()?;
            registry
                .records
                .insert(record.network.clone(), Arc::new(record));
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RegistryBackend for StaticRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        let record = self
            .records
            .get(&network.to_ascii_lowercase())
            .map(|entry| Arc::clone(entry.value()));
        debug!(registry = %self.name, network = %network, found = record.is_some(), "Static lookup");
        Ok(record)
    }

    async fn register(&self, record: NetworkRecord) -> Result<(), DomainError> {
        match self.records.entry(record.network.clone()) {
            Entry::Occupied(_) => Err(DomainError::NetworkAlreadyRegistered(record.network)),
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(record));
                Ok(())
            }
        }
    }

    async fn update(&self, mut record: NetworkRecord) -> Result<(), DomainError> {
        match self.records.get_mut(&record.network) {
            Some(mut current) => {
                record.last_update = Some(Utc::now());
                *current = Arc::new(record);
                Ok(())
            }
            None => Err(DomainError::NetworkNotFound(record.network)),
        }
    }

    async fn networks(&self) -> Vec<String> {
        self.records.iter().map(|entry| entry.key().clone()).collect()
    }
}
