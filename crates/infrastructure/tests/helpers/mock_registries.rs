use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uns_application::ports::{RegistryBackend, RemoteResolver};
use uns_domain::{DomainError, NetworkRecord};

/// Shared, ordered log of which registry was asked for what.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// CountingRegistry: static records + call instrumentation
// ============================================================================

pub struct CountingRegistry {
    name: String,
    records: HashMap<String, Arc<NetworkRecord>>,
    calls: AtomicUsize,
    log: Option<CallLog>,
}

impl CountingRegistry {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            records: HashMap::new(),
            calls: AtomicUsize::new(0),
            log: None,
        }
    }

    pub fn with_record(mut self, record: NetworkRecord) -> Self {
        self.records.insert(record.network.clone(), Arc::new(record));
        self
    }

    pub fn with_log(mut self, log: CallLog) -> Self {
        self.log = Some(log);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistryBackend for CountingRegistry {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(log) = &self.log {
            log.lock().unwrap().push(self.name.clone());
        }
        Ok(self.records.get(network).cloned())
    }
}

// ============================================================================
// FailingRegistry: every lookup errors
// ============================================================================

pub struct FailingRegistry {
    calls: AtomicUsize,
}

impl FailingRegistry {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistryBackend for FailingRegistry {
    fn name(&self) -> &str {
        "failing"
    }

    async fn lookup(&self, _network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::RegistryUnavailable {
            registry: "failing".to_string(),
            reason: "connection refused".to_string(),
        })
    }
}

// ============================================================================
// SlowRegistry: answers after a delay
// ============================================================================

pub struct SlowRegistry {
    delay: Duration,
    record: Arc<NetworkRecord>,
}

impl SlowRegistry {
    pub fn new(delay: Duration, record: NetworkRecord) -> Self {
        Self {
            delay,
            record: Arc::new(record),
        }
    }
}

#[async_trait]
impl RegistryBackend for SlowRegistry {
    fn name(&self) -> &str {
        "slow"
    }

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        tokio::time::sleep(self.delay).await;
        Ok((self.record.network == network).then(|| Arc::clone(&self.record)))
    }
}

// ============================================================================
// MockRemoteResolver: scripted endpoint replies
// ============================================================================

#[derive(Default)]
pub struct MockRemoteResolver {
    replies: Mutex<HashMap<String, Result<String, DomainError>>>,
    calls: Mutex<Vec<(String, String, String)>>,
}

impl MockRemoteResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, endpoint: &str, reply: Result<&str, DomainError>) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), reply.map(str::to_string));
        self
    }

    /// `(endpoint, network, path)` of every call, in order.
    pub fn calls(&self) -> Vec<(String, String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteResolver for MockRemoteResolver {
    async fn resolve_remote(
        &self,
        endpoint: &str,
        network: &str,
        path: &str,
        _timeout: Duration,
    ) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push((
            endpoint.to_string(),
            network.to_string(),
            path.to_string(),
        ));
        self.replies
            .lock()
            .unwrap()
            .get(endpoint)
            .cloned()
            .unwrap_or_else(|| {
                Err(DomainError::ResolverError {
                    endpoint: endpoint.to_string(),
                    reason: "unreachable".to_string(),
                })
            })
    }
}

// ============================================================================
// StallingRegistry: reads the record, then stalls before answering
// ============================================================================

/// Wraps a writable registry. `lookup` fetches the current record first and
/// only then sleeps, so a write during the sleep is invisible to it.
pub struct StallingRegistry {
    inner: Arc<dyn RegistryBackend>,
    delay: Duration,
}

impl StallingRegistry {
    pub fn new(inner: Arc<dyn RegistryBackend>, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait]
impl RegistryBackend for StallingRegistry {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn lookup(&self, network: &str) -> Result<Option<Arc<NetworkRecord>>, DomainError> {
        let record = self.inner.lookup(network).await;
        tokio::time::sleep(self.delay).await;
        record
    }

    async fn register(&self, record: NetworkRecord) -> Result<(), DomainError> {
        self.inner.register(record).await
    }

    async fn update(&self, record: NetworkRecord) -> Result<(), DomainError> {
        self.inner.update(record).await
    }
}

// ============================================================================
// SlowRemoteResolver: some endpoints never answer in time
// ============================================================================

/// Endpoints listed as slow sleep for `delay` before answering; every other
/// endpoint answers `https://fast.example/<network>` at once.
pub struct SlowRemoteResolver {
    slow: Vec<String>,
    delay: Duration,
    calls: Mutex<Vec<String>>,
}

impl SlowRemoteResolver {
    pub fn new(slow: &[&str], delay: Duration) -> Self {
        Self {
            slow: slow.iter().map(|e| e.to_string()).collect(),
            delay,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemoteResolver for SlowRemoteResolver {
    async fn resolve_remote(
        &self,
        endpoint: &str,
        network: &str,
        _path: &str,
        _timeout: Duration,
    ) -> Result<String, DomainError> {
        self.calls.lock().unwrap().push(endpoint.to_string());
        if self.slow.iter().any(|slow| slow == endpoint) {
            tokio::time::sleep(self.delay).await;
            return Ok("https://late.example".to_string());
        }
        Ok(format!("https://fast.example/{network}"))
    }
}
