//! HTTP handlers for pages

use crate::pages::{PageAggregator, PageFetcher, PageId};
use crate::server::response::PageResponse;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, info, warn};
use std::sync::Arc;

const BAD_REQUEST_TEXT: &str = "Expected pageId to be number";
const NOT_FOUND_TEXT: &str = "result not found";
const INTERNAL_ERROR_TEXT: &str = "Unexpected error";

/// `GET /pages/{id}`
///
/// 400 for a non-numeric id, 404 when the page has no SEO document, 500 when
/// a fetch failed, otherwise the page as a [`PageResponse`] JSON body.
pub async fn get_page<F: PageFetcher>(
    State(aggregator): State<Arc<PageAggregator<F>>>,
    Path(raw_id): Path<String>,
) -> Response {
    let page_id: PageId = match raw_id.parse() {
        Ok(page_id) => page_id,
        Err(e) => {
            warn!("Rejecting page id {raw_id:?}: {e}");
            return (StatusCode::BAD_REQUEST, BAD_REQUEST_TEXT).into_response();
        }
    };

    match aggregator.get_page(page_id).await {
        Ok(Some(page)) => {
            info!(
                "Found page with id: {page_id} ({} products)",
                page.products.len()
            );
            Json(PageResponse::from(&page)).into_response()
        }
        Ok(None) => (StatusCode::NOT_FOUND, NOT_FOUND_TEXT).into_response(),
        Err(e) => {
            error!("Getting page {page_id} failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_TEXT).into_response()
        }
    }
}
