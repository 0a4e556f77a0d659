//! Launching page fetches as cancellable tasks.

use crate::pages::error::PageError;
use crate::pages::model::{PageId, Product, Seo};
use crate::pages::store::PageStore;
use crate::pages::util::spawn_fetch;
use crate::runtime::{AsyncTask, FetchContext};
use std::sync::Arc;

/// Value-or-error delivered exactly once by a fetch task.
pub type FetchOutcome<T> = Result<T, PageError>;

/// Starts the two fetches a page is assembled from.
///
/// Each call starts exactly one unit of concurrent work and returns at once.
/// Implementations run the work under a context derived from `ctx` so the
/// returned task can be cancelled independently of its sibling.
pub trait PageFetcher: Send + Sync + 'static {
    /// Fetch the SEO document of a page; `Ok(None)` when there is none.
    fn fetch_seo(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> AsyncTask<FetchOutcome<Option<Seo>>>;

    /// Fetch the products of a page; `Ok(None)` when the collection is absent.
    fn fetch_products(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> AsyncTask<FetchOutcome<Option<Vec<Product>>>>;
}

/// [`PageFetcher`] running blocking [`PageStore`] lookups on the blocking pool.
///
/// Cloning is cheap (Arc clone).
#[derive(Debug)]
pub struct StoreFetcher<S> {
    store: Arc<S>,
}

impl<S: PageStore> StoreFetcher<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::from_arc(Arc::new(store))
    }

    #[must_use]
    pub fn from_arc(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Get the wrapped store
    #[must_use]
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S> Clone for StoreFetcher<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PageStore> PageFetcher for StoreFetcher<S> {
    fn fetch_seo(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> AsyncTask<FetchOutcome<Option<Seo>>> {
        let store = Arc::clone(&self.store);
        spawn_fetch(ctx, move |ctx| store.find_seo(ctx, page_id))
    }

    fn fetch_products(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> AsyncTask<FetchOutcome<Option<Vec<Product>>>> {
        let store = Arc::clone(&self.store);
        spawn_fetch(ctx, move |ctx| store.find_products(ctx, page_id))
    }
}
