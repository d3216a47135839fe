//! Error types for Prowlarr API operations.
//!
//! Failures fall into two families:
//!
//! - [`ValidationError`] - a precondition was violated before any I/O happened.
//! - [`ApiError`] - the request was attempted and failed during or after the
//!   network exchange.
//!
//! Both are wrapped by [`ProwlError`], the error returned by public operations.

use thiserror::Error;

/// Maximum number of characters of a response body kept in an
/// [`ApiError::HttpFailure`] preview.
pub const BODY_PREVIEW_LIMIT: usize = 500;

/// Marker appended to a body preview that was cut at [`BODY_PREVIEW_LIMIT`].
pub const TRUNCATION_MARKER: &str = "... [truncated]";

/// Errors produced by the request dispatcher.
///
/// The set is closed: every failed call lands in exactly one variant and no
/// variant is rewritten into another on the way up.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller-supplied request body could not be encoded as JSON.
    #[error("Failed to serialize request body: {source}")]
    SerializationFailed {
        #[source]
        source: serde_json::Error,
    },

    /// Connection, DNS or socket failure.
    #[error("Network error: {source}")]
    NetworkFailure {
        #[source]
        source: reqwest::Error,
    },

    /// The configured deadline elapsed before a response arrived.
    #[error("Request timed out")]
    Timeout,

    /// The caller cancelled the request before it completed.
    #[error("Request was cancelled")]
    Cancelled,

    /// The server answered with a non-2xx status.
    #[error("Prowlarr API request failed with status code {status}: {body_preview}")]
    HttpFailure { status: u16, body_preview: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to deserialize response (status {status}): {source}\nResponse: {raw_body}")]
    DeserializationFailed {
        status: u16,
        raw_body: String,
        #[source]
        source: serde_json::Error,
    },

    /// A 2xx response that carried no value where one was required.
    #[error("API returned null (status {status}) but a value was expected")]
    UnexpectedNull { status: u16 },
}

impl ApiError {
    /// Build an [`ApiError::HttpFailure`] from a status and the raw body.
    pub fn http_failure(status: u16, body: &[u8]) -> Self {
        Self::HttpFailure {
            status,
            body_preview: body_preview(&String::from_utf8_lossy(body)),
        }
    }

    /// HTTP status associated with this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpFailure { status, .. }
            | Self::DeserializationFailed { status, .. }
            | Self::UnexpectedNull { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the caller withdrew the request.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Whether the request hit its deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Whether the server rejected the request with a 4xx status.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::HttpFailure { status, .. } if (400..500).contains(status))
    }

    /// Whether the server failed with a 5xx status.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::HttpFailure { status, .. } if *status >= 500)
    }
}

/// Failures raised by a [`Transport`](crate::Transport) before a response
/// status is available.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, DNS or socket failure.
    #[error("Network error: {0}")]
    NetworkFailure(#[source] reqwest::Error),

    /// The configured deadline elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The cancellation signal fired first.
    #[error("Request was cancelled")]
    Cancelled,
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::NetworkFailure(source) => ApiError::NetworkFailure { source },
            TransportError::Timeout => ApiError::Timeout,
            TransportError::Cancelled => ApiError::Cancelled,
        }
    }
}

/// A precondition checked by an endpoint before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Resource identifiers are strictly positive.
    #[error("{entity} ID must be positive, got {id}")]
    NonPositiveId { entity: &'static str, id: i32 },

    /// The body of an update targets a different resource than the path.
    #[error("{entity} ID mismatch: update targets {target} but body carries {body}")]
    IdMismatch {
        entity: &'static str,
        target: i32,
        body: i32,
    },
}

/// Errors that can occur during Prowlarr client operations.
#[derive(Debug, Error)]
pub enum ProwlError {
    /// Configuration is missing or incomplete.
    #[error("Prowlarr configuration required: {0}")]
    ConfigMissing(String),

    /// Configuration value present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The base URL is not an absolute http(s) URL.
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClientBuild(#[source] reqwest::Error),

    /// A local precondition failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request was sent and failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Reading local input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Local JSON input or output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProwlError {
    /// The dispatcher error, if this is one.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// The validation error, if this is one.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for Prowlarr operations.
pub type Result<T> = core::result::Result<T, ProwlError>;

/// Cut `body` to [`BODY_PREVIEW_LIMIT`] characters, marking the cut.
pub fn body_preview(body: &str) -> String {
    match body.char_indices().nth(BODY_PREVIEW_LIMIT) {
        Some((cut, _)) => format!("{}{}", &body[..cut], TRUNCATION_MARKER),
        None => body.to_string(),
    }
}
