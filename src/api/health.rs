//! Health check endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// Current status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Books currently mirrored locally
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<usize>,
    /// Base URL of the remote book service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: None,
        remote: None,
    })
}

/// Readiness check endpoint (reports the local list size and the remote service)
pub async fn readiness_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let books = state.library.lock().await.books().len();
    Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        books: Some(books),
        remote: Some(state.config.remote.base_url.clone()),
    })
}
