//! Page service error types

use crate::pages::model::PageId;
use crate::runtime::Interrupted;
use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;

/// Error types for page fetch and assembly
#[derive(Debug, Error)]
pub enum PageError {
    /// Document store I/O failure
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored documents could not be decoded
    #[error("Failed to decode documents: {0}")]
    Decode(#[from] serde_json::Error),

    /// More than one document where at most one is allowed
    #[error("Too many results in {collection} for page {page_id}")]
    TooManyResults {
        collection: &'static str,
        page_id: PageId,
    },

    /// The fetch observed cancellation
    #[error("Fetch cancelled")]
    Cancelled,

    /// The fetch ran past its deadline
    #[error("Fetch deadline exceeded")]
    DeadlineExceeded,

    /// The fetch task stopped without delivering an outcome
    #[error("Fetch task ended without an outcome: {0}")]
    TaskAborted(#[from] RecvError),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic store failure
    #[error("Store error: {0}")]
    Store(String),
}

/// Convenience result alias for page operations
pub type PageResult<T> = Result<T, PageError>;

impl From<Interrupted> for PageError {
    fn from(reason: Interrupted) -> Self {
        match reason {
            Interrupted::Cancelled => PageError::Cancelled,
            Interrupted::DeadlineExceeded => PageError::DeadlineExceeded,
        }
    }
}

// Convenience conversions
impl From<&str> for PageError {
    fn from(s: &str) -> Self {
        PageError::Store(s.to_string())
    }
}
