use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uns_application::ports::RegistryBackend;
use uns_domain::{DomainError, NetworkRecord};

/// Label under which a network publishes its record.
pub const TXT_LABEL: &str = "_utopia";

/// Prefix of the TXT string carrying a base64 JSON record.
pub const TXT_PREFIX: &str = "uns=";

pub fn txt_name(network: &str) -> String {
    format!("{TXT_LABEL}.{}", network.to_ascii_lowercase())
}

fn encode(record: &NetworkRecord) -> Result<String, DomainError> {
    record.validate()?;
    let json = serde_json::to_vec(record)
        .map_err(|e| DomainError::InvalidRecord(format!("cannot encode record: {e}")))?;
    Ok(format!("{TXT_PREFIX}{}", STANDARD.encode(json)))
}

fn has_record(entries: &[String]) -> bool {
    entries.iter().any(|value| value.starts_with(TXT_PREFIX))
}

/// Registry backed by DNS TXT records, served from an in-memory zone.
///
/// A network's record lives at `_utopia.<network>` as `uns=<base64 JSON>`.
pub struct DnsTxtRegistry {
    name: String,
    zone: DashMap<String, Vec<String>>,
}

impl DnsTxtRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            zone: DashMap::new(),
        }
    }

    /// Replace the TXT set of the record's network with the encoded record.
    pub fn publish(&self, record: &NetworkRecord) -> Result<(), DomainError> {
        let txt = encode(record)?;
        self.zone.insert(txt_name(&record.network), vec![txt]);
        Ok(())
    }

    /// Append a raw TXT string to `name`.
    pub fn add_txt(&self, name: impl Into<String>, value: impl Into<String>) {
        self.zone.entry(name.into()).or_default().push(value.into());
    }

    fn decode(&self, txt: &str) -> Result<NetworkRecord, DomainError> {
        let unavailable = |reason: String| DomainError::RegistryUnavailable {
            registry: self.name.clone(),
            reason,
        };

        let encoded = &txt[TXT_PREFIX.len()..];
        let json = STANDARD
            .decode(encoded.trim())
            .map_err(|e| unavailable(format!("TXT record is not base64: {e}")))?;
        serde_json::from_slice(&json)
            .map_err(|e| unavailable(format!("TXT record is not a network record: {e}")))
    }
}

#[async_trait]
impl RegistryBackend for DnsTxtRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        let name = txt_name(network);
        let txt = self.zone.get(&name).and_then(|entries| {
            entries
                .iter()
                .find(|value| value.starts_with(TXT_PREFIX))
                .cloned()
        });

        let Some(txt) = txt else {
            debug!(registry = %self.name, name = %name, "No UNS TXT record");
            return Ok(None);
        };

        self.decode(&txt).map(|record| Some(Arc::new(record)))
    }

    async fn register(&self, record: NetworkRecord) -> Result<(), DomainError> {
        let txt = encode(&record)?;
        match self.zone.entry(txt_name(&record.network)) {
            Entry::Occupied(slot) if has_record(slot.get()) => {
                Err(DomainError::NetworkAlreadyRegistered(record.network))
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().push(txt);
                Ok(())
            }
            Entry::Vacant(slot) => {
                slot.insert(vec![txt]);
                Ok(())
            }
        }
    }

    async fn update(&self, record: NetworkRecord) -> Result<(), DomainError> {
        let txt = encode(&record)?;
        match self.zone.get_mut(&txt_name(&record.network)) {
            Some(mut entries) if has_record(&entries) => {
                entries.retain(|value| !value.starts_with(TXT_PREFIX));
                entries.push(txt);
                Ok(())
            }
            _ => Err(DomainError::NetworkNotFound(record.network)),
        }
    }

    async fn networks(&self) -> Vec<String> {
        let prefix = format!("{TXT_LABEL}.");
        self.zone
            .iter()
            .filter_map(|entry| entry.key().strip_prefix(&prefix).map(str::to_string))
            .collect()
    }
}
