//! HTTP server exposing assembled pages

pub mod config;
pub mod controller;
pub mod response;

pub use config::ServiceConfig;

use crate::pages::{PageAggregator, PageFetcher};
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use log::{error, info};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Build the page routes around an aggregator.
pub fn router<F: PageFetcher>(aggregator: Arc<PageAggregator<F>>) -> Router {
    Router::new()
        .route("/pages/{id}", get(controller::get_page::<F>))
        .with_state(aggregator)
}

/// Serve pages until ctrl-c is received.
pub async fn serve<F: PageFetcher>(
    config: &ServiceConfig,
    aggregator: PageAggregator<F>,
) -> Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Starting server on: {}", listener.local_addr()?);

    axum::serve(listener, router(Arc::new(aggregator)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
