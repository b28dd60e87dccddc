//! Book Library
//!
//! A single-page book manager: a form to add or edit books and a table
//! listing them, kept in sync with a remote `/Book/*` REST service.

use std::sync::Arc;

use tokio::sync::Mutex;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod remote;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Handlers hold the lock across remote calls, so user actions are
    /// applied one at a time.
    pub library: Arc<Mutex<services::LibraryClient>>,
}

impl AppState {
    pub fn new(config: AppConfig, library: services::LibraryClient) -> Self {
        Self {
            config: Arc::new(config),
            library: Arc::new(Mutex::new(library)),
        }
    }
}
