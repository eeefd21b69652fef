pub mod resolve_address;

pub use resolve_address::{ResolutionExtra, ResolutionMetadata, ResolveAddressUseCase};
