//! Mock Prowlarr API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Prowlarr
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests,
//! enabling realistic create/update/delete workflows.
//!
//! # Example
//!
//! ```ignore
//! use prowlapi::mock_server::MockServer;
//! use prowlapi::{Get, Indexer, ProwlarrClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = ProwlarrClient::new(server.url(), "test-key").unwrap();
//!
//!     // Server comes with default fixtures
//!     let indexer = Indexer::get(&client, 1).await.unwrap();
//!     assert_eq!(indexer.name.as_deref(), Some("NZBgeek"));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
