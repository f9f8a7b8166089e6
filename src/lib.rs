pub mod api;
pub mod config;
pub mod logic;
pub mod model;
pub mod seed;
pub mod store;

pub use api::routes;
pub use logic::{filter_movies, MovieFilter};
pub use model::*;
pub use seed::{load_movies, parse_movies, LoadError};
pub use store::{InMemoryStore, MovieReader, MovieStore, MovieWriter, StoreError};

use std::sync::Arc;

use axum::Router;

use crate::config::AppConfig;

/// Router serving `movies` from a fresh in-memory store.
pub fn app_with_movies(movies: Vec<Movie>) -> Router {
    let store = Arc::new(InMemoryStore::new(movies));
    api::routes::create_router::<InMemoryStore>().with_state(store)
}

/// Load the configured data file and build the application router.
///
/// A missing or malformed data file is an error; the service must not start
/// without its collection.
pub fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let movies_file = config.movies_file();
    let movies = seed::load_movies(&movies_file).map_err(|e| {
        anyhow::anyhow!("Could not load movies from {}: {}", movies_file, e)
    })?;
    Ok(app_with_movies(movies))
}

pub async fn run_server(config: &AppConfig) -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let app = build_app(config)?;

    let bind_address = config.server_address();
    let listener = TcpListener::bind(&bind_address).await?;
    log::info!("Movie server running on http://{}", bind_address);
    log::info!("API documentation available at http://{}/docs", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
