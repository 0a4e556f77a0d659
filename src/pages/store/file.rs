//! Directory-backed page store
//!
//! Each collection is a JSON array in `<dir>/<collection>.json`. Lookups
//! re-read the collection file, so edits are picked up without a restart.

use super::{PRODUCTS_COLLECTION, PageStore, SEOS_COLLECTION, select_products, select_seo};
use crate::pages::error::{PageError, PageResult};
use crate::pages::model::{PageId, Product, Seo};
use crate::runtime::FetchContext;
use log::debug;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Page store reading its collections from JSON files in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, which must be an existing directory.
    pub fn open(dir: impl Into<PathBuf>) -> PageResult<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            return Err(PageError::InvalidInput(format!(
                "store directory {} does not exist",
                dir.display()
            )));
        }
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{collection}.json"))
    }

    /// Read a whole collection, `None` when its file does not exist.
    fn read_collection<T: DeserializeOwned>(
        &self,
        ctx: &FetchContext,
        collection: &str,
    ) -> PageResult<Option<Vec<T>>> {
        ctx.check()?;
        let raw = match std::fs::read(self.collection_path(collection)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        ctx.check()?;
        let documents = serde_json::from_slice(&raw)?;
        Ok(Some(documents))
    }
}

impl PageStore for FileStore {
    fn find_seo(&self, ctx: &FetchContext, page_id: PageId) -> PageResult<Option<Seo>> {
        debug!("Getting seo for page_id: {page_id}");
        let seos: Vec<Seo> = self
            .read_collection(ctx, SEOS_COLLECTION)?
            .unwrap_or_default();
        select_seo(ctx, page_id, &seos)
    }

    fn find_products(
        &self,
        ctx: &FetchContext,
        page_id: PageId,
    ) -> PageResult<Option<Vec<Product>>> {
        debug!("Getting products for page_id: {page_id}");
        match self.read_collection::<Product>(ctx, PRODUCTS_COLLECTION)? {
            Some(products) => select_products(ctx, page_id, &products).map(Some),
            None => Ok(None),
        }
    }
}
