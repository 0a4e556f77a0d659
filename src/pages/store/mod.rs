//! Blocking document store access
//!
//! A store holds two collections keyed by page id: `seos` (at most one
//! document per page) and `products` (any number per page). Lookups block the
//! calling thread and must honor the [`FetchContext`] they are given.

use crate::pages::error::{PageError, PageResult};
use crate::pages::model::{PageId, Product, Seo};
use crate::runtime::FetchContext;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Collection holding SEO documents
pub const SEOS_COLLECTION: &str = "seos";
/// Collection holding product documents
pub const PRODUCTS_COLLECTION: &str = "products";

/// Blocking lookups against a page document store.
pub trait PageStore: Send + Sync + 'static {
    /// The SEO document of a page, `None` when the page has none.
    ///
    /// Two or more documents for one page is a [`PageError::TooManyResults`].
    fn find_seo(&self, ctx: &FetchContext, page_id: PageId) -> PageResult<Option<Seo>>;

    /// Products of a page, `None` when the store has no products collection.
    fn find_products(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> PageResult<Option<Vec<Product>>>;
}

/// Pick the single SEO document of `page_id` out of a collection scan.
pub(crate) fn select_seo<'a>(
    ctx: &FetchContext,
    page_id: PageId,
    seos: impl IntoIterator<Item = &'a Seo>,
) -> PageResult<Option<Seo>> {
    let mut found: Option<&Seo> = None;
    for seo in seos {
        ctx.check()?;
        if seo.page_id != page_id {
            continue;
        }
        if found.is_some() {
            return Err(PageError::TooManyResults {
                collection: SEOS_COLLECTION,
                page_id,
            });
        }
        found = Some(seo);
    }
    Ok(found.cloned())
}

/// Collect the products of `page_id` out of a collection scan.
pub(crate) fn select_products<'a>(
    ctx: &FetchContext,
    page_id: PageId,
    products: impl IntoIterator<Item = &'a Product>,
) -> PageResult<Vec<Product>> {
    let mut selected = Vec::new();
    for product in products {
        ctx.check()?;
        if product.page_id == page_id {
            selected.push(product.clone());
        }
    }
    Ok(selected)
}
