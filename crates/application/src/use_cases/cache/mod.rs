pub mod clear_cache;
pub mod get_stats;

pub use clear_cache::ClearCacheUseCase;
pub use get_stats::{GetResolverStatsUseCase, ResolverStats};
