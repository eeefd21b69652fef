use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uns_application::ports::ResolutionCache;

/// Periodically drops expired entries from the resolution cache.
///
/// Lookups already ignore expired entries; this only reclaims memory for
/// addresses that are never asked for again.
pub struct CacheEvictionJob {
    cache: Arc<dyn ResolutionCache>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl CacheEvictionJob {
    pub fn new(cache: Arc<dyn ResolutionCache>) -> Self {
        Self {
            cache,
            interval: Duration::from_secs(60),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs_f64(),
            "Starting cache eviction job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.tick().await;
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheEvictionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let evicted = self.cache.evict_expired();
                        if evicted > 0 {
                            info!(evicted, remaining = self.cache.len(), "Expired cache entries evicted");
                        } else {
                            debug!(remaining = self.cache.len(), "Cache eviction pass found nothing");
                        }
                    }
                }
            }
        });
    }
}
