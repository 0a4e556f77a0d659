// Page service HTTP server
//
// Serves GET /pages/{id} from a directory-backed document store.
// Configured through flags or SERVICE_PORT / PAGES_DATA_DIR / PAGES_FETCH_TIMEOUT_MS.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pages_ms::{FileStore, PageAggregator, ServiceConfig, StoreFetcher, server};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServiceConfig::parse();
    info!("Starting application with {config:?}");

    let store = FileStore::open(&config.data_dir)
        .with_context(|| format!("Failed to open store at {}", config.data_dir.display()))?;

    let mut aggregator = PageAggregator::new(StoreFetcher::new(store));
    if let Some(timeout) = config.fetch_timeout() {
        aggregator = aggregator.with_timeout(timeout);
    }

    server::serve(&config, aggregator).await
}
