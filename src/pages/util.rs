//! Page fetch utilities

use crate::runtime::{AsyncTask, FetchContext};

/// Spawn a blocking store lookup under its own context.
///
/// This is a convenience wrapper around `AsyncTask::spawn_cancellable`
/// that derives the task context from the request context, so cancelling
/// the task never cancels its sibling.
#[inline]
pub fn spawn_fetch<T, F>(parent: &FetchContext, work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: FnOnce(&FetchContext) -> T + Send + 'static,
{
    AsyncTask::spawn_cancellable(parent.child(), work)
}
