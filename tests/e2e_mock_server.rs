//! E2E tests using the mock Prowlarr server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use prowlapi::mock_server::{Fixtures, MockServer, MockState};
use prowlapi::{
    get_system_status, Application, Create, Delete, Field, Get, Indexer, IndexerProtocol, List,
    ProwlarrClient, Update,
};

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    // Both servers should have different URLs
    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/health", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Indexer Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_indexer_lifecycle_workflow() {
    let server = MockServer::start_empty().await;
    let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

    // Step 1: Nothing configured yet
    assert!(Indexer::list(&client).await.unwrap().is_empty());

    // Step 2: Create
    let mut new = Indexer::named("NZBgeek");
    new.protocol = IndexerProtocol::Usenet;
    new.fields = vec![Field::new("baseUrl", "https://api.nzbgeek.info")];
    let created = Indexer::create(&client, &new).await.expect("Failed to create");
    assert!(created.id > 0);

    // Step 3: Read back
    let fetched = Indexer::get(&client, created.id).await.unwrap();
    assert_eq!(fetched, created);

    // Step 4: Update
    let changed = Indexer {
        priority: 5,
        enable: false,
        ..fetched
    };
    let updated = Indexer::update(&client, changed.id, &changed).await.unwrap();
    assert_eq!(updated.priority, 5);
    assert!(!updated.enable);

    // Step 5: Delete, then it is gone
    Indexer::delete(&client, updated.id).await.unwrap();
    let err = Indexer::get(&client, updated.id).await.unwrap_err();
    assert_eq!(err.as_api().and_then(|e| e.status()), Some(404));

    server.shutdown().await;
}

#[tokio::test]
async fn test_delete_unknown_indexer_is_not_found() {
    let server = MockServer::start().await;
    let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

    let err = Indexer::delete(&client, 999).await.unwrap_err();
    let api = err.as_api().expect("Expected an API error");

    assert_eq!(api.status(), Some(404));
    assert!(api.to_string().contains("404"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_default_fixtures_are_served() {
    let server = MockServer::start().await;
    let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

    let indexers = Indexer::list(&client).await.unwrap();
    assert_eq!(indexers.len(), 2);
    assert_eq!(indexers[1].protocol, IndexerProtocol::Torrent);

    let apps = Application::list(&client).await.unwrap();
    assert_eq!(apps[0].implementation.as_deref(), Some("Sonarr"));

    let status = get_system_status(&client).await.unwrap();
    assert_eq!(status.version.as_deref(), Some("1.21.2.4649"));

    server.shutdown().await;
}

// =============================================================================
// Application Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_application_lifecycle_workflow() {
    let state = MockState::new().with_application(Fixtures::application(
        4,
        "Radarr",
        "http://radarr:7878",
    ));
    let server = MockServer::with_state(state).await;
    let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

    let created = Application::create(&client, &Fixtures::application(0, "Lidarr", "http://lidarr:8686"))
        .await
        .unwrap();
    assert_eq!(created.id, 5);

    let mut radarr = Application::get(&client, 4).await.unwrap();
    radarr.sync_level = Some("addOnly".to_string());
    let updated = Application::update(&client, 4, &radarr).await.unwrap();
    assert_eq!(updated.sync_level.as_deref(), Some("addOnly"));

    Application::delete(&client, 4).await.unwrap();
    let remaining = Application::list(&client).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, 5);

    server.shutdown().await;
}

// =============================================================================
// Authentication Tests
// =============================================================================

#[tokio::test]
async fn test_wrong_api_key_is_rejected() {
    let state = MockState::new().with_required_token("right-key");
    let server = MockServer::with_state(state).await;

    let good = ProwlarrClient::new(server.url(), "right-key").unwrap();
    assert!(Indexer::list(&good).await.is_ok());

    let bad = ProwlarrClient::new(server.url(), "wrong-key").unwrap();
    let err = Indexer::list(&bad).await.unwrap_err();
    assert_eq!(err.as_api().and_then(|e| e.status()), Some(401));

    server.shutdown().await;
}

// =============================================================================
// State Manipulation Tests
// =============================================================================

#[tokio::test]
async fn test_state_changes_are_visible_to_client() {
    let server = MockServer::start_empty().await;
    let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

    {
        let state = server.state();
        let mut state = state.write().await;
        state
            .indexers
            .insert(11, Fixtures::minimal_indexer(11, "Injected"));
    }

    let indexer = Indexer::get(&client, 11).await.unwrap();
    assert_eq!(indexer.name.as_deref(), Some("Injected"));

    server.shutdown().await;
}
