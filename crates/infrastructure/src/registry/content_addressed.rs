use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use sha2::{Digest, Sha256};
use std::fmt::Write;
use std::sync::Arc;
use tracing::{debug, warn};
use uns_application::ports::RegistryBackend;
use uns_domain::{DomainError, NetworkRecord};

const CID_PREFIX: &str = "bafy";

/// Content id of a blob: `bafy` followed by the hex SHA-256 digest.
pub fn content_id(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut cid = String::with_capacity(CID_PREFIX.len() + digest.len() * 2);
    cid.push_str(CID_PREFIX);
    for byte in digest {
        let _ = write!(cid, "{byte:02x}");
    }
    cid
}

fn encode(record: &NetworkRecord) -> Result<(String, Arc<[u8]>), DomainError> {
    record.validate()?;
    let bytes = serde_json::to_vec(record)
        .map_err(|e| DomainError::InvalidRecord(format!("cannot encode record: {e}")))?;
    Ok((content_id(&bytes), Arc::from(bytes)))
}

/// In-memory content-addressed store.
///
/// Records are stored as JSON blobs under their content id and a pin table
/// maps each network to its current blob. Blobs are re-hashed on every read.
pub struct ContentAddressedRegistry {
    name: String,
    blobs: DashMap<String, Arc<[u8]>>,
    pins: DashMap<String, String>,
}

impl ContentAddressedRegistry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            blobs: DashMap::new(),
            pins: DashMap::new(),
        }
    }

    /// Store a record and pin its network to the new blob.
    pub fn publish(&self, record: &NetworkRecord) -> Result<String, DomainError> {
        let (cid, bytes) = encode(record)?;
        self.blobs.insert(cid.clone(), bytes);
        self.pins.insert(record.network.clone(), cid.clone());
        debug!(registry = %self.name, network = %record.network, cid = %cid, "Record published");
        Ok(cid)
    }

    /// Import a raw blob under `cid` without hashing it.
    pub fn import_blob(&self, cid: impl Into<String>, bytes: Vec<u8>) {
        self.blobs.insert(cid.into(), Arc::from(bytes));
    }

    pub fn pin(&self, network: impl Into<String>, cid: impl Into<String>) {
        self.pins.insert(network.into(), cid.into());
    }

    pub fn cid_of(&self, network: &str) -> Option<String> {
        self.pins.get(network).map(|cid| cid.value().clone())
    }

    fn unavailable(&self, reason: impl Into<String>) -> DomainError {
        DomainError::RegistryUnavailable {
            registry: self.name.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl RegistryBackend for ContentAddressedRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        let Some(cid) = self.cid_of(&network.to_ascii_lowercase()) else {
            return Ok(None);
        };

        let blob = self
            .blobs
            .get(&cid)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| self.unavailable(format!("blob {cid} is pinned but missing")))?;

        if content_id(&blob) != cid {
            warn!(registry = %self.name, network = %network, cid = %cid, "Blob failed integrity check");
            return Err(self.unavailable(format!("blob {cid} does not match its content id")));
        }

        let record: NetworkRecord = serde_json::from_slice(&blob)
            .map_err(|e| self.unavailable(format!("blob {cid} is not a record: {e}")))?;
        Ok(Some(Arc::new(record)))
    }

    async fn register(&self, record: NetworkRecord) -> Result<(), DomainError> {
        let (cid, bytes) = encode(&record)?;
        match self.pins.entry(record.network.clone()) {
            Entry::Occupied(_) => Err(DomainError::NetworkAlreadyRegistered(record.network)),
            Entry::Vacant(slot) => {
                self.blobs.insert(cid.clone(), bytes);
                slot.insert(cid.clone());
                debug!(registry = %self.name, network = %record.network, cid = %cid, "Record registered");
                Ok(())
            }
        }
    }

    async fn update(&self, record: NetworkRecord) -> Result<(), DomainError> {
        let (cid, bytes) = encode(&record)?;
        match self.pins.get_mut(&record.network) {
            Some(mut pin) => {
                self.blobs.insert(cid.clone(), bytes);
                *pin = cid;
                Ok(())
            }
            None => Err(DomainError::NetworkNotFound(record.network)),
        }
    }

    async fn networks(&self) -> Vec<String> {
        self.pins.iter().map(|entry| entry.key().clone()).collect()
    }
}
