//! HTTP surface: the library page, its form actions, and health checks

pub mod health;
pub mod pages;
pub mod render;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{error::AppResult, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Page and form actions
        .route("/", get(pages::index))
        .route("/books", post(pages::submit_book))
        .route("/books/:index/edit", post(pages::edit_book))
        .route("/books/:index/delete", post(pages::delete_book))
        .route("/status/dismiss", post(pages::dismiss_status))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}

/// Remote failures are already on the page as a status message; only the
/// other errors become HTTP errors.
fn surfaced(result: AppResult<()>) -> AppResult<()> {
    match result {
        Err(e) if e.is_reported() => Ok(()),
        other => other,
    }
}
