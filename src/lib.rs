//! `pages_ms` - page assembly service
//!
//! A page is the pairing of its SEO document and its products. Both are
//! looked up concurrently in a blocking document store; the first failure
//! (or a missing SEO document) ends the lookup early and cancels the other
//! fetch. The `server` module exposes pages over HTTP.

// Module declarations
pub mod pages;
pub mod runtime;
pub mod server;

// Re-export runtime types
pub use runtime::{AsyncTask, FetchContext, Interrupted};

// Re-export page types
pub use pages::{
    FetchOutcome, FileStore, MemoryStore, Page, PageAggregator, PageError, PageFetcher, PageId,
    PageResult, PageStore, Product, Seo, StoreFetcher,
};

// Re-export server configuration
pub use server::ServiceConfig;
