use std::sync::Arc;
use std::time::{Duration, Instant};

/// A resolved URL and the instant it was stored.
#[derive(Debug, Clone)]
pub struct CachedUrl {
    pub url: Arc<str>,
    pub stored_at: Instant,
}

impl CachedUrl {
    pub fn new(url: Arc<str>) -> Self {
        Self {
            url,
            stored_at: Instant::now(),
        }
    }

    /// An entry expires once its age reaches the TTL.
    #[inline]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() >= ttl
    }
}
