//! Indexer endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use super::{authorize, not_found};
use crate::mock_server::state::MockState;
use crate::Indexer;

/// GET /api/v1/indexer
pub async fn list_indexers(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let indexers: Vec<Indexer> = state.list_indexers().into_iter().cloned().collect();
    (StatusCode::OK, Json(indexers)).into_response()
}

/// GET /api/v1/indexer/{id}
pub async fn get_indexer(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.indexers.get(&id) {
        Some(indexer) => (StatusCode::OK, Json(indexer.clone())).into_response(),
        None => not_found("Indexer", id),
    }
}

/// POST /api/v1/indexer
pub async fn create_indexer(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(indexer): Json<Indexer>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let created = state.create_indexer(indexer).clone();
    (StatusCode::CREATED, Json(created)).into_response()
}

/// PUT /api/v1/indexer/{id}
pub async fn update_indexer(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(indexer): Json<Indexer>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.update_indexer(id, indexer) {
        Some(updated) => (StatusCode::ACCEPTED, Json(updated.clone())).into_response(),
        None => not_found("Indexer", id),
    }
}

/// DELETE /api/v1/indexer/{id}
pub async fn delete_indexer(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.indexers.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found("Indexer", id),
    }
}
