//! HTTP request handlers for the mock server.

pub mod applications;
pub mod indexers;
pub mod system;

pub use applications::*;
pub use indexers::*;
pub use system::*;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::mock_server::state::MockState;
use crate::API_KEY_HEADER;

/// Reject the request with 401 unless it carries the required API key.
pub(crate) fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let token = headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
    if state.is_authorized(token) {
        Ok(())
    } else {
        Err((
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "Unauthorized" })),
        )
            .into_response())
    }
}

/// 404 body in the shape Prowlarr returns.
pub(crate) fn not_found(kind: &str, id: i32) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "message": "NotFound",
            "description": format!("{kind} with ID {id} does not exist")
        })),
    )
        .into_response()
}
