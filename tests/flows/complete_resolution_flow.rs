/// Complete Resolution Flow Test
///
/// Address → Cache miss → Registry chain → Mapping → Cache → URL

#[path = "../common/mod.rs"]
mod common;

use common::{TestAddresses, TestEngineBuilder, TestRecords};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uns_application::ports::ResolutionCache;
use uns_domain::config::{RegistryConfig, RegistryKind};
use uns_domain::DomainError;

fn static_registry(name: &str, file: &tempfile::NamedTempFile) -> RegistryConfig {
    let mut config = RegistryConfig::new(RegistryKind::Static, name);
    config.records_file = Some(file.path().to_path_buf());
    config
}

// ============================================================================
// Example scenarios
// ============================================================================

#[tokio::test]
async fn test_subdomain_resolves_to_base_url() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    let url = engine.resolve.execute(TestAddresses::obsidian_notes()).await.unwrap();

    assert_eq!(url, "https://notes.dillanet.org");
    assert_eq!(engine.cache.len(), 1);
}

#[tokio::test]
async fn test_query_and_fragment_are_carried_over() {
    let file = TestRecords::records_file(&[TestRecords::alice()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    let url = engine
        .resolve
        .execute(TestAddresses::alice_blog_with_query())
        .await
        .unwrap();

    assert_eq!(url, "https://alice.blog?x=1#top");
}

#[tokio::test]
async fn test_short_network_is_invalid_address() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    let err = engine.resolve.execute(TestAddresses::short_network()).await.unwrap_err();

    assert!(matches!(err, DomainError::InvalidAddress { .. }));
    assert_eq!(engine.total_lookups(), 0);
}

#[tokio::test]
async fn test_unknown_network_is_not_found() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .with_registry(RegistryConfig::new(RegistryKind::DnsTxt, "dns"))
        .build();

    let err = engine.resolve.execute(TestAddresses::unknown_network()).await.unwrap_err();

    assert_eq!(err, DomainError::NetworkNotFound("unknownnet".to_string()));
    assert_eq!(engine.registries[0].lookups(), 1);
    assert_eq!(engine.registries[1].lookups(), 1);
}

#[tokio::test]
async fn test_missing_subdomain_is_resource_not_found() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    let err = engine
        .resolve
        .execute(TestAddresses::missing_subdomain())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::ResourceNotFound { ref network, .. } if network == "dillanet"));
    assert!(engine.cache.is_empty());
}

#[tokio::test]
async fn test_clear_cache_triggers_fresh_registry_query() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    engine.resolve.execute(TestAddresses::obsidian_notes()).await.unwrap();
    engine.resolve.execute(TestAddresses::obsidian_notes()).await.unwrap();
    assert_eq!(engine.total_lookups(), 1);

    assert_eq!(engine.clear_cache.execute(), 1);
    let url = engine.resolve.execute(TestAddresses::obsidian_notes()).await.unwrap();

    assert_eq!(url, "https://notes.dillanet.org");
    assert_eq!(engine.total_lookups(), 2);
}

// ============================================================================
// Stats, metadata and cancellation
// ============================================================================

#[tokio::test]
async fn test_stats_track_every_attempt() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    engine.resolve.execute(TestAddresses::obsidian_notes()).await.unwrap();
    engine.resolve.execute(TestAddresses::obsidian_notes()).await.unwrap();
    let _ = engine.resolve.execute(TestAddresses::unknown_network()).await;

    let stats = engine.get_stats.execute();
    assert_eq!(stats.attempts, 3);
    assert_eq!(stats.successes, 2);
    assert_eq!(stats.failures, 1);
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(stats.cache_size, 1);
}

#[tokio::test]
async fn test_metadata_reports_source_of_resolution() {
    let file = TestRecords::records_file(&[TestRecords::alice()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    let meta = engine
        .resolve
        .execute_with_metadata("utopia.alice//.blog/post/1", true)
        .await
        .unwrap();

    assert_eq!(meta.url, "https://alice.blog/post/1");
    assert!(!meta.cache_hit);
    let extra = meta.extra.unwrap();
    assert_eq!(extra.network, "alice");
    assert_eq!(extra.subdomain.as_deref(), Some(".blog"));
    assert_eq!(extra.resource_path, "/post/1");
    assert_eq!(extra.registry.as_deref(), Some("local"));
    assert!(!extra.cache_hit);
}

#[tokio::test]
async fn test_every_backend_kind_resolves_the_same_record() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);

    for kind in [RegistryKind::Static, RegistryKind::ContentAddressed, RegistryKind::DnsTxt] {
        let mut registry = RegistryConfig::new(kind, "only");
        registry.records_file = Some(file.path().to_path_buf());
        let engine = TestEngineBuilder::new().with_registry(registry).build();

        let url = engine.resolve.execute(TestAddresses::obsidian_notes()).await.unwrap();
        assert_eq!(url, "https://notes.dillanet.org", "kind {kind}");
    }
}

#[tokio::test]
async fn test_cancelled_before_start_leaves_cache_untouched() {
    let file = TestRecords::records_file(&[TestRecords::dillanet()]);
    let engine = TestEngineBuilder::new()
        .with_registry(static_registry("local", &file))
        .build();

    let token = CancellationToken::new();
    token.cancel();

    let err = engine
        .resolve
        .execute_cancellable(TestAddresses::obsidian_notes(), &token)
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::Cancelled);
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(engine.cache.is_empty());
    assert_eq!(engine.get_stats.execute().failures, 1);
}
