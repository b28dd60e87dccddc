//! Book Library - single-page book manager
//!
//! Serves the library page and forwards its actions to the remote book
//! service.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_library::{
    api,
    config::AppConfig,
    remote::HttpBookApi,
    services::LibraryClient,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("book_library={},tower_http=debug", config.logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Starting Book Library v{}", env!("CARGO_PKG_VERSION"));

    let remote = HttpBookApi::new(&config.remote)?;
    tracing::info!("Using book service at {}", remote.base_url());

    let mut library = LibraryClient::new(Arc::new(remote), config.status.ttl());
    // A failed initial load is shown on the page; the server still starts
    if library.load_all().await.is_err() {
        tracing::warn!("Starting with an empty book list");
    }

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    let state = AppState::new(config, library);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
