//! Configuration module for the UNS resolver
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Engine timeouts
//! - `cache`: Resolution cache settings
//! - `registry`: Ordered registry chain
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod root;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use registry::{RegistryConfig, RegistryKind};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
