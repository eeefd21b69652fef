//! Registry backends
//!
//! All backends satisfy `RegistryBackend`. Only the static table is a real
//! store; the content-addressed and DNS TXT backends keep their data in
//! memory and stand in for networked implementations.

pub mod content_addressed;
pub mod dns_txt;
pub mod loader;
pub mod static_registry;

pub use content_addressed::{content_id, ContentAddressedRegistry};
pub use dns_txt::{txt_name, DnsTxtRegistry};
pub use loader::{build_registries, build_registry, load_records};
pub use static_registry::StaticRegistry;
