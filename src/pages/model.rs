//! Page documents and the assembled page.

use serde::{Deserialize, Serialize};

/// Identifier shared by a page, its SEO document and its products.
pub type PageId = i64;

/// SEO metadata of a page. At most one exists per page; without it the page
/// does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seo {
    pub page_id: PageId,
    pub title: String,
    pub description: String,
    pub robots: String,
}

/// A product listed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub page_id: PageId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// A page: its SEO metadata together with its (possibly empty) products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub seo: Seo,
    pub products: Vec<Product>,
}
