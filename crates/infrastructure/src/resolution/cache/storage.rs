use super::{CacheMetrics, CachedUrl};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uns_application::ports::ResolutionCache;
use uns_domain::network_key_prefix;

const SHARD_AMOUNT: usize = 64;

/// Concurrent address -> URL cache with a single TTL.
///
/// Each key's check-expiry-and-remove runs under its shard lock, and removal
/// only happens if the entry is still expired, so a concurrent overwrite is
/// never lost.
///
/// Invalidations advance `generation` before touching any shard, and guarded
/// inserts re-check it under the shard lock, so a resolution that started
/// before an invalidation can never store its result after it.
pub struct UnsCache {
    entries: DashMap<Arc<str>, CachedUrl, FxBuildHasher>,
    generation: AtomicU64,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl UnsCache {
    pub fn new(ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Initializing resolution cache");

        Self {
            entries: DashMap::with_hasher_and_shard_amount(FxBuildHasher::default(), SHARD_AMOUNT),
            generation: AtomicU64::new(0),
            ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    fn invalidate(&self) {
        self.generation.fetch_add(1, AtomicOrdering::SeqCst);
    }

    fn count(&self, counter: &std::sync::atomic::AtomicU64, n: usize) {
        counter.fetch_add(n as u64, AtomicOrdering::Relaxed);
    }
}

impl ResolutionCache for UnsCache {
    fn get(&self, key: &str) -> Option<Arc<str>> {
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(self.ttl) => {
                self.count(&self.metrics.hits, 1);
                return Some(Arc::clone(&entry.url));
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            let ttl = self.ttl;
            if self
                .entries
                .remove_if(key, |_, entry| entry.is_expired(ttl))
                .is_some()
            {
                self.count(&self.metrics.lazy_deletions, 1);
                debug!(key = %key, "Expired cache entry removed on read");
            }
        }

        self.count(&self.metrics.misses, 1);
        None
    }

    fn insert(&self, key: &str, url: Arc<str>) {
        self.entries.insert(Arc::from(key), CachedUrl::new(url));
        self.count(&self.metrics.insertions, 1);
    }

    fn generation(&self) -> u64 {
        self.generation.load(AtomicOrdering::SeqCst)
    }

    fn insert_if_generation(&self, key: &str, url: Arc<str>, generation: u64) -> bool {
        let entry = self.entries.entry(Arc::from(key));
        if self.generation.load(AtomicOrdering::SeqCst) != generation {
            debug!(key = %key, "Cache invalidated during resolution, result dropped");
            return false;
        }

        match entry {
            Entry::Occupied(mut occupied) => {
                occupied.insert(CachedUrl::new(url));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(CachedUrl::new(url));
            }
        }
        self.count(&self.metrics.insertions, 1);
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.invalidate();
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.count(&self.metrics.invalidations, 1);
        }
        removed
    }

    fn remove_network(&self, network: &str) -> usize {
        let prefix = network_key_prefix(network);
        self.invalidate();
        let mut removed = 0;
        self.entries.retain(|key, _| {
            if key.starts_with(&prefix) {
                removed += 1;
                false
            } else {
                true
            }
        });
        self.count(&self.metrics.invalidations, removed);
        debug!(network = %network, removed, "Network cache entries invalidated");
        removed
    }

    fn clear(&self) -> usize {
        self.invalidate();
        let mut removed = 0;
        self.entries.retain(|_, _| {
            removed += 1;
            false
        });
        self.count(&self.metrics.invalidations, removed);
        removed
    }

    fn evict_expired(&self) -> usize {
        let ttl = self.ttl;
        let mut evicted = 0;
        self.entries.retain(|_, entry| {
            if entry.is_expired(ttl) {
                evicted += 1;
                false
            } else {
                true
            }
        });
        self.count(&self.metrics.evictions, evicted);
        evicted
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
