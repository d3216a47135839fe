//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{ProwlError, Result};

/// Default Prowlarr address when `PROWLARR_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:9696";

/// Default per-request deadline.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

const USER_AGENT: &str = concat!("prowlapi/", env!("CARGO_PKG_VERSION"));

/// Connection settings for a [`ProwlarrClient`](crate::ProwlarrClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Absolute base URL of the Prowlarr instance.
    pub base_url: String,
    /// Pre-shared API key sent as `X-Api-Key`.
    pub api_key: String,
    /// Per-request deadline. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Settings for `base_url` and `api_key` with default timeout and user agent.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: USER_AGENT.to_string(),
        }
    }

    /// Read settings from the environment.
    ///
    /// - `PROWLARR_API_KEY` (required)
    /// - `PROWLARR_URL` (defaults to `http://localhost:9696`)
    /// - `PROWLARR_TIMEOUT_SECS` (defaults to 100; `0` disables the deadline)
    ///
    /// # Errors
    ///
    /// Returns an error if `PROWLARR_API_KEY` is not set or the timeout is not
    /// a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("PROWLARR_API_KEY").map_err(|_| {
            ProwlError::ConfigMissing("PROWLARR_API_KEY environment variable not set".to_string())
        })?;
        let base_url = env::var("PROWLARR_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let mut config = Self::new(base_url, api_key);
        if let Ok(raw) = env::var("PROWLARR_TIMEOUT_SECS") {
            config.timeout = parse_timeout_secs(&raw)?;
        }
        Ok(config)
    }

    /// Replace the per-request deadline.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the API key and normalize the base URL.
    ///
    /// The returned URL always ends with `/` so relative endpoint paths join
    /// underneath it rather than replacing its last segment.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank key or a base URL that is not an absolute
    /// `http`/`https` URL.
    pub fn validate(&self) -> Result<Url> {
        if self.api_key.trim().is_empty() {
            return Err(ProwlError::InvalidConfig(
                "API key must not be empty".to_string(),
            ));
        }
        normalize_base_url(&self.base_url)
    }
}

/// Parse `raw` as an absolute http(s) URL ending in `/`.
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let invalid = |reason: &str| ProwlError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid("URL must not be empty"));
    }

    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| invalid(&e.to_string()))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("must be an absolute http or https URL"));
    }
    Ok(url)
}

fn parse_timeout_secs(raw: &str) -> Result<Option<Duration>> {
    let secs: u64 = raw.trim().parse().map_err(|_| {
        ProwlError::InvalidConfig(format!("PROWLARR_TIMEOUT_SECS must be an integer, got '{raw}'"))
    })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}
