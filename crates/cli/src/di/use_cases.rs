use super::ResolverServices;
use std::sync::Arc;
use uns_application::services::ResolutionStats;
use uns_application::use_cases::{
    ClearCacheUseCase, GetResolverStatsUseCase, ListNetworksUseCase, RegisterNetworkUseCase,
    ResolveAddressUseCase, UpdateNetworkUseCase,
};
use uns_domain::Config;
use uns_infrastructure::Ed25519RecordVerifier;

pub struct UseCases {
    pub resolve: Arc<ResolveAddressUseCase>,
    pub clear_cache: Arc<ClearCacheUseCase>,
    pub get_stats: Arc<GetResolverStatsUseCase>,
    pub list_networks: Arc<ListNetworksUseCase>,
    pub register_network: Option<Arc<RegisterNetworkUseCase>>,
    pub update_network: Option<Arc<UpdateNetworkUseCase>>,
}

impl UseCases {
    pub fn new(config: &Config, services: &ResolverServices) -> Self {
        let stats = Arc::new(ResolutionStats::new());
        let cache = services.cache_port();
        let verifier = Arc::new(Ed25519RecordVerifier::new());

        let register_network = services.writable.as_ref().map(|registry| {
            Arc::new(
                RegisterNetworkUseCase::new(Arc::clone(registry), verifier.clone())
                    .with_cache(Arc::clone(&cache)),
            )
        });
        let update_network = services.writable.as_ref().map(|registry| {
            Arc::new(
                UpdateNetworkUseCase::new(Arc::clone(registry), verifier.clone())
                    .with_cache(Arc::clone(&cache)),
            )
        });

        Self {
            resolve: Arc::new(
                ResolveAddressUseCase::new(Arc::clone(&services.resolver), stats.clone())
                    .with_deadline(config.resolver.resolve_timeout()),
            ),
            clear_cache: Arc::new(ClearCacheUseCase::new(Arc::clone(&cache))),
            get_stats: Arc::new(GetResolverStatsUseCase::new(cache, stats)),
            list_networks: Arc::new(ListNetworksUseCase::new(services.registries.clone())),
            register_network,
            update_network,
        }
    }
}
