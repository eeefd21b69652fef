//! UNS Domain Layer
pub mod address;
pub mod config;
pub mod errors;
pub mod network_record;
pub mod validators;

pub use address::{cache_key, network_key_prefix, UnsAddress};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use network_record::{NetworkRecord, ResolverEndpoint};
