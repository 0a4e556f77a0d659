//! In-memory page store

use super::{PageStore, select_products, select_seo};
use crate::pages::error::PageResult;
use crate::pages::model::{PageId, Product, Seo};
use crate::runtime::FetchContext;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

/// Both collections of a store as one JSON document.
#[derive(Debug, Default, Deserialize)]
struct Dataset {
    #[serde(default)]
    seos: Vec<Seo>,
    #[serde(default)]
    products: Option<Vec<Product>>,
}

/// Page store keeping its collections in memory.
///
/// An optional per-lookup latency makes lookups behave like remote queries;
/// the wait is interrupted as soon as the lookup context is cancelled.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    seos: Vec<Seo>,
    products: Option<Vec<Product>>,
    latency: Duration,
}

impl MemoryStore {
    /// Empty store without a products collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load both collections from a JSON object with `seos` and `products` arrays.
    pub fn from_json_str(json: &str) -> PageResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Ok(Self {
            seos: dataset.seos,
            products: dataset.products,
            latency: Duration::ZERO,
        })
    }

    #[must_use]
    pub fn with_seo(mut self, seo: Seo) -> Self {
        self.seos.push(seo);
        self
    }

    /// Add products, creating the products collection if needed.
    #[must_use]
    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        self.products.get_or_insert_with(Vec::new).extend(products);
        self
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl PageStore for MemoryStore {
    fn find_seo(&self, ctx: &FetchContext, page_id: PageId) -> PageResult<Option<Seo>> {
        debug!("Getting seo for page_id: {page_id}");
        ctx.wait(self.latency)?;
        select_seo(ctx, page_id, &self.seos)
    }

    fn find_products(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> PageResult<Option<Vec<Product>>> {
        debug!("Getting products for page_id: {page_id}");
        ctx.wait(self.latency)?;
        match &self.products {
            Some(products) => select_products(ctx, page_id, products).map(Some),
            None => Ok(None),
        }
    }
}
