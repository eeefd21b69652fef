use crate::CacheEvictionJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for all background jobs.
///
/// Use the builder pattern to register jobs, then call `.start()` once.
///
/// # Example
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_cache_eviction(CacheEvictionJob::new(cache).with_cancellation(token))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    cache_eviction: Option<CacheEvictionJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            cache_eviction: None,
        }
    }

    pub fn with_cache_eviction(mut self, job: CacheEvictionJob) -> Self {
        self.cache_eviction = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.cache_eviction {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
