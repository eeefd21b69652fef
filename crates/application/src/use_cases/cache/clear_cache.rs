use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ResolutionCache;

pub struct ClearCacheUseCase {
    cache: Arc<dyn ResolutionCache>,
}

impl ClearCacheUseCase {
    pub fn new(cache: Arc<dyn ResolutionCache>) -> Self {
        Self { cache }
    }

    /// Empty the cache. Returns how many entries were dropped.
    #[instrument(skip(self))]
    pub fn execute(&self) -> usize {
        let cleared = self.cache.clear();
        info!(cleared, "Resolution cache cleared");
        cleared
    }
}
