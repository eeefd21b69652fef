// Resolution cache: address -> URL with TTL

pub mod metrics;
pub mod record;
pub mod storage;

pub use metrics::CacheMetrics;
pub use record::CachedUrl;
pub use storage::UnsCache;
