//! Page operations module
//!
//! Assembles a page from its SEO document and its products, both looked up
//! concurrently in a page store.

pub mod aggregator;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod store;
pub mod util;

// Re-export aggregation types
pub use aggregator::PageAggregator;
pub use fetcher::{FetchOutcome, PageFetcher, StoreFetcher};

// Re-export error types
pub use error::{PageError, PageResult};

// Re-export model and store types
pub use model::{Page, PageId, Product, Seo};
pub use store::{FileStore, MemoryStore, PageStore};
pub use util::spawn_fetch;
