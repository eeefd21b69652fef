pub mod cache_eviction;
pub mod runner;

pub use cache_eviction::CacheEvictionJob;
pub use runner::JobRunner;
