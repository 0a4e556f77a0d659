//! Page assembly: joins the SEO and products fetches of a page.
//!
//! Both fetches start together and are raced. The first decisive outcome
//! ends the join early and cancels the fetch still in flight:
//!
//! - an error from either side fails the whole page with that error;
//! - a missing SEO document means the page does not exist (`Ok(None)`);
//! - a missing products collection is just an empty product list.
//!
//! Otherwise the page is returned once both fetches delivered, and neither
//! task is cancelled.

use crate::pages::error::{PageError, PageResult};
use crate::pages::fetcher::{FetchOutcome, PageFetcher};
use crate::pages::model::{Page, PageId, Product, Seo};
use crate::runtime::{AsyncTask, FetchContext};
use futures::future::FusedFuture;
use log::{debug, info, warn};
use std::time::Duration;
use tokio::sync::oneshot::error::RecvError;

/// Progress of a page join between two arrivals.
#[derive(Debug)]
pub(crate) enum JoinState {
    Waiting,
    SeoDone(Seo),
    ProductsDone(Vec<Product>),
}

/// What an arrival did to the join.
#[derive(Debug)]
pub(crate) enum Step {
    Pending(JoinState),
    Completed(Option<Page>),
    Failed(PageError),
}

/// An outcome taken from one of the two tasks.
#[derive(Debug)]
pub(crate) enum Arrival {
    Seo(FetchOutcome<Option<Seo>>),
    Products(FetchOutcome<Option<Vec<Product>>>),
}

impl JoinState {
    pub(crate) fn advance(self, arrival: Arrival) -> Step {
        match (self, arrival) {
            (_, Arrival::Seo(Err(e)) | Arrival::Products(Err(e))) => Step::Failed(e),
            (_, Arrival::Seo(Ok(None))) => Step::Completed(None),
            (JoinState::ProductsDone(products), Arrival::Seo(Ok(Some(seo)))) => {
                Step::Completed(Some(Page { seo, products }))
            }
            (_, Arrival::Seo(Ok(Some(seo)))) => Step::Pending(JoinState::SeoDone(seo)),
            (JoinState::SeoDone(seo), Arrival::Products(Ok(products))) => {
                Step::Completed(Some(Page {
                    seo,
                    products: products.unwrap_or_default(),
                }))
            }
            (_, Arrival::Products(Ok(products))) => {
                Step::Pending(JoinState::ProductsDone(products.unwrap_or_default()))
            }
        }
    }
}

/// A task that ended without an outcome is treated like a failed fetch.
fn settle<T>(received: Result<FetchOutcome<T>, RecvError>) -> FetchOutcome<T> {
    received.unwrap_or_else(|closed| Err(PageError::from(closed)))
}

/// Assembles pages from a [`PageFetcher`].
///
/// Holds no per-request state; every call owns its tasks.
#[derive(Debug, Clone)]
pub struct PageAggregator<F> {
    fetcher: F,
    timeout: Option<Duration>,
}

impl<F: PageFetcher> PageAggregator<F> {
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            timeout: None,
        }
    }

    /// Bound every `get_page` call by a deadline handed down to both fetches.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get the page for `page_id`.
    ///
    /// Returns `Ok(None)` when the page has no SEO document.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by either fetch, unchanged.
    pub async fn get_page(&self, page_id: PageId) -> PageResult<Option<Page>> {
        let ctx = match self.timeout {
            Some(timeout) => FetchContext::new().with_timeout(timeout),
            None => FetchContext::new(),
        };
        self.get_page_with(&ctx, page_id).await
    }

    /// Like [`PageAggregator::get_page`], with both fetches running under
    /// contexts derived from `ctx`. Cancelling `ctx` cancels both.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by either fetch, unchanged.
    pub async fn get_page_with(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> PageResult<Option<Page>> {
        info!("Getting page for id: {page_id}");
        let mut seo_task = self.fetcher.fetch_seo(ctx, page_id);
        let mut products_task = self.fetcher.fetch_products(ctx, page_id);

        let mut state = JoinState::Waiting;
        loop {
            let arrival = tokio::select! {
                received = &mut seo_task, if !seo_task.is_terminated() => {
                    Arrival::Seo(settle(received))
                }
                received = &mut products_task, if !products_task.is_terminated() => {
                    Arrival::Products(settle(received))
                }
            };
            let from_seo = matches!(arrival, Arrival::Seo(_));

            match state.advance(arrival) {
                Step::Pending(next) => state = next,
                Step::Completed(page) => {
                    if page.is_none() {
                        debug!("No seo for page {page_id}, cancelling products fetch");
                        cancel_pending(&products_task);
                    }
                    return Ok(page);
                }
                Step::Failed(e) => {
                    warn!("Getting page {page_id} failed: {e}");
                    if from_seo {
                        cancel_pending(&products_task);
                    } else {
                        cancel_pending(&seo_task);
                    }
                    return Err(e);
                }
            }
        }
    }
}

/// Cancel the losing branch of an early exit, unless it already delivered.
fn cancel_pending<T>(task: &AsyncTask<T>) {
    if !task.is_terminated() {
        task.cancel();
    }
}
