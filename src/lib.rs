//! Prowlarr API client library.
//!
//! A Rust library for the Prowlarr REST API. Every call goes through one
//! [`Dispatcher`] that serializes the request, sends it over a [`Transport`],
//! classifies the outcome into an [`ApiError`] and decodes the response.
//! Entity operations (Get, List, Create, Update, Delete) are traits that
//! model types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use prowlapi::{Get, Indexer, List, ProwlarrClient};
//!
//! #[tokio::main]
//! async fn main() -> prowlapi::Result<()> {
//!     // Create client from environment variables
//!     let client = ProwlarrClient::from_env()?;
//!
//!     let status = prowlapi::get_system_status(&client).await?;
//!     println!("Prowlarr {}", status.version.as_deref().unwrap_or("?"));
//!
//!     // List all indexers
//!     let indexers = Indexer::list(&client).await?;
//!     println!("Found {} indexers", indexers.len());
//!
//!     // Fetch one by id
//!     let indexer = Indexer::get(&client, 1).await?;
//!     println!("Indexer: {:?}", indexer.name);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Local precondition failures are reported as [`ValidationError`] before
//! any I/O. Everything that happens once a request is attempted is an
//! [`ApiError`]. Both are wrapped by [`ProwlError`].
//!
//! # Cancellation
//!
//! Each operation has a `*_cancellable` form taking a
//! [`CancellationToken`]. Cancellation yields [`ApiError::Cancelled`],
//! distinct from [`ApiError::Timeout`].
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `PROWLARR_API_KEY` (required) - API key sent as `X-Api-Key`
//! - `PROWLARR_URL` (optional) - Base URL (defaults to `http://localhost:9696`)
//! - `PROWLARR_TIMEOUT_SECS` (optional) - Per-request deadline, `0` to disable

pub mod cli;
mod client;
pub mod config;
pub mod dispatch;
mod error;
mod models;
pub mod output;
mod traits;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::ProwlarrClient;
pub use config::ClientConfig;
pub use dispatch::{Dispatcher, Request};
pub use error::{ApiError, ProwlError, Result, TransportError, ValidationError};
pub use transport::{HttpTransport, RawResponse, Transport, API_KEY_HEADER};

pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;

// Re-export traits
pub use traits::{Create, Delete, Get, List, Resource, Update};

// Re-export models
pub use models::{
    // Application types
    Application,
    // Shared field types
    Field,
    FieldValue,
    // Indexer types
    Indexer,
    IndexerProtocol,
    // System types
    SystemStatus,
    DEFAULT_PRIORITY,
};

// Re-export convenience functions
pub use models::{get_system_status, get_system_status_cancellable};
