use serde::Serialize;
use std::sync::Arc;

use crate::ports::ResolutionCache;
use crate::services::ResolutionStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolverStats {
    pub cache_size: usize,
    pub attempts: u64,
    pub successes: u64,
    pub failures: u64,
    pub cache_hits: u64,
}

pub struct GetResolverStatsUseCase {
    cache: Arc<dyn ResolutionCache>,
    stats: Arc<ResolutionStats>,
}

impl GetResolverStatsUseCase {
    pub fn new(cache: Arc<dyn ResolutionCache>, stats: Arc<ResolutionStats>) -> Self {
        Self { cache, stats }
    }

    pub fn execute(&self) -> ResolverStats {
        let snapshot = self.stats.snapshot();
        ResolverStats {
            cache_size: self.cache.len(),
            attempts: snapshot.attempts,
            successes: snapshot.successes,
            failures: snapshot.failures,
            cache_hits: snapshot.cache_hits,
        }
    }
}
