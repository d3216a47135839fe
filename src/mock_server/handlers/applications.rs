//! Application endpoint handlers.

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
use crate::Application;

/// GET /api/v1/applications
pub async fn list_applications(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let applications: Vec<Application> =
        state.list_applications().into_iter().cloned().collect();
    (StatusCode::OK, Json(applications)).into_response()
}

/// GET /api/v1/applications/{id}
pub async fn get_application(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.applications.get(&id) {
        Some(app) => (StatusCode::OK, Json(app.clone())).into_response(),
        None => not_found("Application", id),
    }
}

/// POST /api/v1/applications
pub async fn create_application(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Json(application): Json<Application>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    let created = state.create_application(application).clone();
    (StatusCode::CREATED, Json(created)).into_response()
}

/// PUT /api/v1/applications/{id}
pub async fn update_application(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    Json(application): Json<Application>,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.update_application(id, application) {
        Some(updated) => (StatusCode::ACCEPTED, Json(updated.clone())).into_response(),
        None => not_found("Application", id),
    }
}

/// DELETE /api/v1/applications/{id}
pub async fn delete_application(
    State(state): State<Arc<RwLock<MockState>>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
) -> Response {
    let mut state = state.write().await;
    if let Err(rejection) = authorize(&state, &headers) {
        return rejection;
    }

    match state.applications.remove(&id) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => not_found("Application", id),
    }
}
