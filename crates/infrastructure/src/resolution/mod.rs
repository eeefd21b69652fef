pub mod cache;
pub mod resolver;
pub mod transport;

pub use cache::{CacheMetrics, UnsCache};
pub use resolver::ResolverBuilder;
pub use transport::HttpRemoteResolver;
