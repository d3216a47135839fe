//! Raw HTTP transport.
//!
//! A [`Transport`] performs exactly one round trip per call and reports what
//! came back as a [`RawResponse`]. It knows nothing about JSON or response
//! shapes; classification of statuses and bodies happens in the
//! [`Dispatcher`](crate::Dispatcher).

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ProwlError, Result, TransportError};

/// Header carrying the pre-shared API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

const JSON: &str = "application/json";

/// Status and body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw body bytes, possibly empty.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Build a response from a status and body.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Empty or whitespace-only body.
    pub fn is_blank(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one request and returns the raw response.
///
/// Implementations must not retry and must honour `cancel`: once it fires the
/// pending exchange is abandoned and [`TransportError::Cancelled`] returned.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send `body` (already JSON-encoded) to `path`, relative to the base URL.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> std::result::Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> std::result::Result<RawResponse, TransportError> {
        (**self).send(method, path, body, cancel).await
    }
}

/// reqwest-backed [`Transport`].
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
    base_url: Arc<Url>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not absolute, the API key is blank
    /// or not a legal header value, or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.validate()?;

        let mut api_key = HeaderValue::from_str(config.api_key.trim()).map_err(|_| {
            ProwlError::InvalidConfig("API key contains characters not allowed in a header".to_string())
        })?;
        api_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(HeaderName::from_static("x-api-key"), api_key);

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(ProwlError::HttpClientBuild)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    /// Normalized base URL, always ending in `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
        cancel: &CancellationToken,
    ) -> std::result::Result<RawResponse, TransportError> {
        if cancel.is_cancelled() {
            return Err(TransportError::Cancelled);
        }

        let mut request = self.http.request(method, self.endpoint(path));
        if let Some(bytes) = body {
            request = request.header(CONTENT_TYPE, JSON).body(bytes);
        }

        let exchange = async {
            let response = request.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(RawResponse::new(status, body.to_vec()))
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(TransportError::Cancelled),
            result = exchange => result.map_err(classify),
        }
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::NetworkFailure(err)
    }
}
