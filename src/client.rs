//! Prowlarr API client.
//!
//! Wires configuration, transport and dispatcher together. Entity-specific
//! operations are implemented via traits on the model types.

use std::sync::Arc;

use url::Url;

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::error::Result;
use crate::transport::{HttpTransport, Transport};

/// Prowlarr API client.
///
/// Entity operations are implemented via the `Get`, `List`, `Create`,
/// `Update` and `Delete` traits on model types.
///
/// This struct is cheaply cloneable; clones share the same connection pool
/// and may be used concurrently.
///
/// # Example
///
/// ```no_run
/// use prowlapi::ProwlarrClient;
///
/// # fn example() -> prowlapi::Result<()> {
/// // Create from environment variables
/// let client = ProwlarrClient::from_env()?;
///
/// // Or configure manually
/// let client = ProwlarrClient::new("http://localhost:9696", "your-api-key")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ProwlarrClient {
    dispatcher: Dispatcher,
    base_url: Option<Arc<Url>>,
}

impl std::fmt::Debug for ProwlarrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProwlarrClient")
            .field("base_url", &self.base_url.as_ref().map(|u| u.as_str()))
            .finish_non_exhaustive()
    }
}

impl ProwlarrClient {
    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if `PROWLARR_API_KEY` is not set or the configuration
    /// is invalid.
    pub fn from_env() -> Result<Self> {
        Self::with_config(&ClientConfig::from_env()?)
    }

    /// Create a client for `base_url` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not absolute or the key is blank.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        Self::with_config(&ClientConfig::new(base_url, api_key))
    }

    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        let base_url = Arc::new(transport.base_url().clone());
        Ok(Self {
            dispatcher: Dispatcher::new(Arc::new(transport)),
            base_url: Some(base_url),
        })
    }

    /// Create a client over a custom [`Transport`].
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport),
            base_url: None,
        }
    }

    /// The normalized base URL, when built over HTTP.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_deref()
    }

    /// The dispatcher, for calls the typed endpoints do not cover.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
