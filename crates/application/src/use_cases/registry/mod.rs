pub mod list_networks;
pub mod register_network;
pub mod update_network;

pub use list_networks::ListNetworksUseCase;
pub use register_network::RegisterNetworkUseCase;
pub use update_network::UpdateNetworkUseCase;
