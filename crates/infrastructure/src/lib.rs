//! UNS Infrastructure Layer
//!
//! Concrete registries, the resolution cache, the resolver decorator stack,
//! the HTTP transport for remote resolver endpoints and record signing.
pub mod registry;
pub mod resolution;
pub mod signing;

pub use registry::{ContentAddressedRegistry, DnsTxtRegistry, StaticRegistry};
pub use resolution::{CacheMetrics, HttpRemoteResolver, ResolverBuilder, UnsCache};
pub use signing::{Ed25519RecordSigner, Ed25519RecordVerifier};
