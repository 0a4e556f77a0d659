//! Service configuration

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the page service, read from flags or the environment
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pages-ms",
    version,
    about = "Serves pages assembled from SEO and product documents"
)]
pub struct ServiceConfig {
    /// Port the HTTP server listens on
    #[arg(long, env = "SERVICE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Directory holding the `seos.json` and `products.json` collections
    #[arg(long, env = "PAGES_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Deadline for assembling a single page, in milliseconds
    #[arg(long, env = "PAGES_FETCH_TIMEOUT_MS")]
    pub fetch_timeout_ms: Option<u64>,
}

impl ServiceConfig {
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("data"),
            fetch_timeout_ms: None,
        }
    }
}
