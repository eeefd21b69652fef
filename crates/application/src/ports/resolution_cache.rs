use std::sync::Arc;

/// Address -> URL memo with TTL expiry.
///
/// Keys are lowercased addresses (see `uns_domain::cache_key`).
pub trait ResolutionCache: Send + Sync {
    /// Live entry for `key`; expired entries are dropped and reported as absent.
    fn get(&self, key: &str) -> Option<Arc<str>>;

    /// Store or overwrite the entry for `key`.
    fn insert(&self, key: &str, url: Arc<str>);

    /// Invalidation counter. Advances on every `remove`, `remove_network`
    /// and `clear`, before any entry is dropped.
    fn generation(&self) -> u64;

    /// Store `url` only if no invalidation happened since `generation` was
    /// read. Returns whether the entry was written.
    fn insert_if_generation(&self, key: &str, url: Arc<str>, generation: u64) -> bool;

    fn remove(&self, key: &str) -> bool;

    /// Drop every entry belonging to `network`. Returns the number removed.
    fn remove_network(&self, network: &str) -> usize;

    /// Drop every entry. Returns the number removed.
    fn clear(&self) -> usize;

    /// Drop every expired entry. Returns the number removed.
    fn evict_expired(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
