//! Typed request dispatch.
//!
//! The [`Dispatcher`] turns a [`Request`] into a typed value or a classified
//! [`ApiError`]:
//!
//! 1. encode the body as JSON (`SerializationFailed`, before any I/O)
//! 2. hand it to the [`Transport`] (`NetworkFailure`, `Timeout`, `Cancelled`)
//! 3. reject non-2xx statuses regardless of body (`HttpFailure`)
//! 4. treat 204 and blank bodies as "no value"
//! 5. decode the body (`DeserializationFailed`, `UnexpectedNull`)

pub mod case_fold;

use std::borrow::Cow;
use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::transport::{RawResponse, Transport};

use self::case_fold::CaseInsensitive;

const NO_CONTENT: u16 = 204;

/// One call against the service: verb, path relative to the base URL and an
/// optional body.
///
/// ```
/// use prowlapi::Request;
///
/// let list = Request::get("api/v1/indexer");
/// assert_eq!(list.path(), "api/v1/indexer");
/// assert!(list.body().is_none());
/// ```
#[derive(Debug)]
pub struct Request<'a, B: ?Sized = ()> {
    method: Method,
    path: Cow<'a, str>,
    body: Option<&'a B>,
}

impl<'a> Request<'a, ()> {
    /// `GET path`.
    pub fn get(path: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::GET, path, None)
    }

    /// `DELETE path`.
    pub fn delete(path: impl Into<Cow<'a, str>>) -> Self {
        Self::new(Method::DELETE, path, None)
    }
}

impl<'a, B: ?Sized> Request<'a, B> {
    /// Arbitrary verb, path and body.
    pub fn new(method: Method, path: impl Into<Cow<'a, str>>, body: Option<&'a B>) -> Self {
        Self {
            method,
            path: path.into(),
            body,
        }
    }

    /// `POST path` with a JSON body.
    pub fn post(path: impl Into<Cow<'a, str>>, body: &'a B) -> Self {
        Self::new(Method::POST, path, Some(body))
    }

    /// `PUT path` with a JSON body.
    pub fn put(path: impl Into<Cow<'a, str>>, body: &'a B) -> Self {
        Self::new(Method::PUT, path, Some(body))
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> Option<&'a B> {
        self.body
    }
}

/// Generic request/response cycle over a [`Transport`].
///
/// Holds no per-call state, so one instance (or its clones) can serve any
/// number of concurrent calls.
#[derive(Clone)]
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Send `request` and decode the response as `R`.
    ///
    /// Returns `Ok(None)` for 204 or a blank body. A JSON `null` is handed to
    /// `R`; types that cannot represent it (anything but `Option`, `()` or
    /// [`Value`]) yield [`ApiError::UnexpectedNull`].
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] variant; see the module docs for when each occurs.
    pub async fn dispatch<B, R>(
        &self,
        request: &Request<'_, B>,
        cancel: &CancellationToken,
    ) -> Result<Option<R>, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let raw = self.exchange(request, cancel).await?;
        decode(&raw)
    }

    /// Like [`dispatch`](Self::dispatch) but a value is required: an empty
    /// response is reported as [`ApiError::UnexpectedNull`].
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] variant.
    pub async fn dispatch_value<B, R>(
        &self,
        request: &Request<'_, B>,
        cancel: &CancellationToken,
    ) -> Result<R, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let raw = self.exchange(request, cancel).await?;
        decode(&raw)?.ok_or(ApiError::UnexpectedNull { status: raw.status })
    }

    /// Send `request` for its effect only. Any 2xx body is ignored.
    ///
    /// # Errors
    ///
    /// `SerializationFailed`, the transport errors, or `HttpFailure`.
    pub async fn dispatch_no_content<B>(
        &self,
        request: &Request<'_, B>,
        cancel: &CancellationToken,
    ) -> Result<(), ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        self.exchange(request, cancel).await.map(drop)
    }

    #[tracing::instrument(skip_all, fields(method = %request.method(), path = %request.path()))]
    async fn exchange<B>(
        &self,
        request: &Request<'_, B>,
        cancel: &CancellationToken,
    ) -> Result<RawResponse, ApiError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let body = request
            .body()
            .map(|body| serde_json::to_vec(body))
            .transpose()
            .map_err(|source| ApiError::SerializationFailed { source })?;

        debug!("dispatching request");
        let raw = self
            .transport
            .send(request.method().clone(), request.path(), body, cancel)
            .await?;
        debug!(status = raw.status, bytes = raw.body.len(), "received response");

        if !raw.is_success() {
            warn!(status = raw.status, "request failed");
            return Err(ApiError::http_failure(raw.status, &raw.body));
        }
        Ok(raw)
    }
}

/// Decode a successful response. `Ok(None)` means the response carried no value.
pub(crate) fn decode<R: DeserializeOwned>(raw: &RawResponse) -> Result<Option<R>, ApiError> {
    if raw.status == NO_CONTENT || raw.is_blank() {
        return Ok(None);
    }

    let failed = |source: serde_json::Error| ApiError::DeserializationFailed {
        status: raw.status,
        raw_body: raw.text(),
        source,
    };

    let value: Value = serde_json::from_slice(&raw.body).map_err(failed)?;
    if value.is_null() {
        return R::deserialize(CaseInsensitive(Value::Null))
            .map(Some)
            .map_err(|_| ApiError::UnexpectedNull { status: raw.status });
    }

    let parsed = R::deserialize(CaseInsensitive(value)).map_err(|source| {
        warn!(status = raw.status, error = %source, "response did not match expected shape");
        failed(source)
    })?;
    Ok(Some(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde::Deserialize;

    use crate::error::TransportError;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i32,
        name: Option<String>,
    }

    /// Answers every call with a fixed response and counts calls.
    struct Canned {
        response: RawResponse,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                response: RawResponse::new(status, body),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(
            &self,
            _method: Method,
            _path: &str,
            _body: Option<Vec<u8>>,
            cancel: &CancellationToken,
        ) -> Result<RawResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if cancel.is_cancelled() {
                return Err(TransportError::Cancelled);
            }
            Ok(self.response.clone())
        }
    }

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse::new(status, body)
    }

    #[test]
    fn test_decode_value() {
        let item: Option<Item> = decode(&raw(200, r#"{"id":7,"name":"X"}"#)).unwrap();
        assert_eq!(
            item,
            Some(Item {
                id: 7,
                name: Some("X".to_string())
            })
        );
    }

    #[test]
    fn test_decode_no_content_and_blank_bodies() {
        assert_eq!(decode::<Item>(&raw(204, "")).unwrap(), None);
        assert_eq!(decode::<Item>(&raw(200, "")).unwrap(), None);
        assert_eq!(decode::<Item>(&raw(201, "  \n")).unwrap(), None);
        // 204 wins even if a server sends something anyway
        assert_eq!(decode::<Item>(&raw(204, "garbage")).unwrap(), None);
    }

    #[test]
    fn test_decode_invalid_json_keeps_full_body() {
        let body = format!("<html>{}</html>", "x".repeat(2000));
        let err = decode::<Item>(&raw(200, &body)).unwrap_err();
        match err {
            ApiError::DeserializationFailed {
                status, raw_body, ..
            } => {
                assert_eq!(status, 200);
                assert_eq!(raw_body, body);
            }
            other => panic!("expected DeserializationFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let err = decode::<Item>(&raw(200, r#"{"id":"seven"}"#)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::DeserializationFailed { status: 200, .. }
        ));
    }

    #[test]
    fn test_decode_null_for_required_value() {
        let err = decode::<Item>(&raw(200, "null")).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedNull { status: 200 }));

        let err = decode::<Vec<Item>>(&raw(200, " null ")).unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedNull { status: 200 }));
    }

    #[test]
    fn test_decode_null_for_optional_value() {
        let parsed: Option<Option<Vec<Item>>> = decode(&raw(200, "null")).unwrap();
        assert_eq!(parsed, Some(None));
    }

    #[tokio::test]
    async fn test_http_failure_wins_over_valid_json() {
        let transport = Canned::new(500, r#"{"id":1,"name":"looks fine"}"#);
        let dispatcher = Dispatcher::new(transport);

        let err = dispatcher
            .dispatch::<_, Item>(&Request::get("api/v1/indexer/1"), &CancellationToken::new())
            .await
            .unwrap_err();
        match err {
            ApiError::HttpFailure {
                status,
                body_preview,
            } => {
                assert_eq!(status, 500);
                assert_eq!(body_preview, r#"{"id":1,"name":"looks fine"}"#);
            }
            other => panic!("expected HttpFailure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_serialization_failure_skips_network() {
        let transport = Canned::new(200, "{}");
        let dispatcher = Dispatcher::new(transport.clone());

        // JSON object keys must be strings
        let mut body = BTreeMap::new();
        body.insert((1u8, 2u8), "pair");

        let err = dispatcher
            .dispatch_no_content(&Request::post("api/v1/indexer", &body), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::SerializationFailed { .. }));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_no_content_call_ignores_body() {
        let transport = Canned::new(200, "{ this is not json");
        let dispatcher = Dispatcher::new(transport);

        dispatcher
            .dispatch_no_content(&Request::delete("api/v1/indexer/3"), &CancellationToken::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_dispatch_value_rejects_empty_body() {
        let transport = Canned::new(200, "");
        let dispatcher = Dispatcher::new(transport);

        let err = dispatcher
            .dispatch_value::<_, Item>(&Request::get("api/v1/indexer/3"), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UnexpectedNull { status: 200 }));
    }

    #[tokio::test]
    async fn test_cancellation_surfaces_as_cancelled() {
        let transport = Canned::new(200, "{}");
        let dispatcher = Dispatcher::new(transport);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = dispatcher
            .dispatch::<_, Item>(&Request::get("api/v1/indexer"), &cancel)
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_concurrent_dispatches_share_one_dispatcher() {
        let transport = Canned::new(200, r#"{"id":1}"#);
        let dispatcher = Dispatcher::new(transport.clone());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let dispatcher = dispatcher.clone();
                tokio::spawn(async move {
                    dispatcher
                        .dispatch_value::<_, Item>(
                            &Request::get("api/v1/indexer/1"),
                            &CancellationToken::new(),
                        )
                        .await
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap().id, 1);
        }
        assert_eq!(transport.calls.load(Ordering::SeqCst), 16);
    }
}
