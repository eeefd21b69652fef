//! UNS resolver built with the Decorator Pattern
//!
//! - **Cache**: address -> URL memo with TTL (outermost)
//! - **Core**: parsing, registry chain with fallback, record mapping (innermost)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use uns_infrastructure::resolution::resolver::ResolverBuilder;
//!
//! let resolver = ResolverBuilder::new(remote)
//!     .with_registry(static_registry)
//!     .with_registry(dns_registry)
//!     .with_cache(cache)
//!     .build();
//! ```

pub mod builder;
pub mod cache_layer;
pub mod config;
pub mod core;

pub use builder::ResolverBuilder;
pub use cache_layer::CachedResolver;
pub use config::ResolverConfig;
pub use core::CoreResolver;
