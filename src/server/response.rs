//! Response bodies of the page routes.
//!
//! Stored documents use snake_case fields; clients of the page route expect
//! `SEO`/`Products` with PascalCase fields, so responses get their own shape.

use crate::pages::{Page, PageId, Product, Seo};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageResponse<'a> {
    #[serde(rename = "SEO")]
    pub seo: SeoResponse<'a>,
    #[serde(rename = "Products")]
    pub products: Vec<ProductResponse<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SeoResponse<'a> {
    pub page_id: PageId,
    pub title: &'a str,
    pub description: &'a str,
    pub robots: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductResponse<'a> {
    pub id: i64,
    pub page_id: PageId,
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
}

impl<'a> From<&'a Seo> for SeoResponse<'a> {
    fn from(seo: &'a Seo) -> Self {
        Self {
            page_id: seo.page_id,
            title: &seo.title,
            description: &seo.description,
            robots: &seo.robots,
        }
    }
}

impl<'a> From<&'a Product> for ProductResponse<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id,
            page_id: product.page_id,
            name: &product.name,
            description: &product.description,
            price: product.price,
        }
    }
}

impl<'a> From<&'a Page> for PageResponse<'a> {
    fn from(page: &'a Page) -> Self {
        Self {
            seo: SeoResponse::from(&page.seo),
            products: page.products.iter().map(ProductResponse::from).collect(),
        }
    }
}
