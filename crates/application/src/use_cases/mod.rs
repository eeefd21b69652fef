pub mod cache;
pub mod registry;
pub mod resolve;

// Re-export use cases
pub use cache::{ClearCacheUseCase, GetResolverStatsUseCase, ResolverStats};
pub use registry::{ListNetworksUseCase, RegisterNetworkUseCase, UpdateNetworkUseCase};
pub use resolve::{ResolutionExtra, ResolutionMetadata, ResolveAddressUseCase};
