//! Mock Prowlarr API server.
//!
//! Provides an axum-based HTTP server that simulates the Prowlarr API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::MockState;

/// An in-process Prowlarr stand-in bound to a loopback port.
///
/// Requests are served from a background task until [`shutdown`](Self::shutdown)
/// is called or the runtime stops.
pub struct MockServer {
    url: String,
    handle: JoinHandle<()>,
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Serve the default scenario: two indexers, one application and a status.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Serve no indexers or applications and a default status.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Serve `state`.
    ///
    /// # Panics
    ///
    /// Panics if no loopback port can be bound.
    pub async fn with_state(state: MockState) -> Self {
        let state = state.shared();
        let router = Self::create_router(Arc::clone(&state));

        // Port 0: OS-assigned.
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind loopback listener");
        let addr = listener.local_addr().expect("listener address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.expect("mock server stopped");
        });

        Self {
            url: format!("http://{addr}"),
            handle,
            state,
        }
    }

    /// Base URL to hand to [`ProwlarrClient::new`](crate::ProwlarrClient::new).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The live state; writes are visible to the next request.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        Arc::clone(&self.state)
    }

    /// Stop serving and wait for the task to finish.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Seed a [`MockState`] from `scenario`.
    pub fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let state = scenario
            .indexers
            .into_iter()
            .fold(MockState::new(), MockState::with_indexer);
        scenario
            .applications
            .into_iter()
            .fold(state, MockState::with_application)
            .with_status(scenario.status)
    }

    /// The axum router over `state`, usable without binding a port.
    pub fn create_router(state: Arc<RwLock<MockState>>) -> Router {
        Router::new()
            // Indexer routes
            .route(
                "/api/v1/indexer",
                get(handlers::list_indexers).post(handlers::create_indexer),
            )
            .route(
                "/api/v1/indexer/:id",
                get(handlers::get_indexer)
                    .put(handlers::update_indexer)
                    .delete(handlers::delete_indexer),
            )
            // Application routes
            .route(
                "/api/v1/applications",
                get(handlers::list_applications).post(handlers::create_application),
            )
            .route(
                "/api/v1/applications/:id",
                get(handlers::get_application)
                    .put(handlers::update_application)
                    .delete(handlers::delete_application),
            )
            // System routes
            .route("/api/v1/system/status", get(handlers::get_status))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Get, Indexer, List, ProwlarrClient, API_KEY_HEADER};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let response = reqwest::get(format!("{}/health", server.url()))
            .await
            .expect("health request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_indexer_with_client() {
        let server = MockServer::start().await;
        let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

        let indexer = Indexer::get(&client, 1).await.expect("Failed to get indexer");

        assert_eq!(indexer.name.as_deref(), Some("NZBgeek"));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_list_indexers_with_client() {
        let server = MockServer::start().await;
        let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

        let indexers = Indexer::list(&client).await.expect("Failed to list indexers");

        assert_eq!(indexers.len(), 2);
        assert_eq!(indexers[0].id, 1);

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = ProwlarrClient::new(server.url(), "test-key").unwrap();

        let err = Indexer::get(&client, 1).await.unwrap_err();

        assert_eq!(err.as_api().and_then(|e| e.status()), Some(404));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_router_rejects_missing_key() {
        let state = MockState::new().with_required_token("secret").shared();
        let app = MockServer::create_router(state);

        let response = app
            .clone()
            .oneshot(
                Request::get("/api/v1/indexer")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(
                Request::get("/api/v1/indexer")
                    .header(API_KEY_HEADER, "secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_router_delete_returns_no_content() {
        let state = MockState::new()
            .with_indexer(Fixtures::minimal_indexer(4, "Doomed"))
            .shared();
        let app = MockServer::create_router(state.clone());

        let response = app
            .oneshot(
                Request::delete("/api/v1/indexer/4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(state.read().await.indexers.is_empty());
    }
}
