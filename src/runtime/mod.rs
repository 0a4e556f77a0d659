//! Runtime module
//!
//! Provides cancellable async task execution and the fetch context.

pub mod async_task;
pub mod context;

// Re-export runtime types
pub use async_task::AsyncTask;
pub use context::{FetchContext, Interrupted};
