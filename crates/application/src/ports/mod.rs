pub mod address_resolver;
pub mod record_verifier;
pub mod registry_backend;
pub mod remote_resolver;
pub mod resolution_cache;

pub use address_resolver::{AddressResolver, Resolution};
pub use record_verifier::RecordVerifier;
pub use registry_backend::RegistryBackend;
pub use remote_resolver::RemoteResolver;
pub use resolution_cache::ResolutionCache;
