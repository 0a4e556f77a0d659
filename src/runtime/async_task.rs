//! Async task abstraction for page fetch operations.
//!
//! Channel-based design: every task owns a single-slot oneshot channel for
//! its outcome plus the cancellation token of the context it runs under.

use crate::runtime::FetchContext;
use futures::future::FusedFuture;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

// ============================================================================
// AsyncTask - Single-result cancellable operation
// ============================================================================

/// A handle to an asynchronous task that produces a single result.
///
/// Uses a oneshot channel internally, so the producer can always deposit its
/// outcome without blocking, even when the handle was dropped.
///
/// The handle also carries the task's cancellation trigger. Dropping a handle
/// whose outcome was never observed cancels the task.
pub struct AsyncTask<T> {
    rx: oneshot::Receiver<T>,
    cancel: CancellationToken,
    terminated: bool,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    /// Create from a oneshot receiver and the token its producer observes.
    #[inline]
    #[must_use]
    pub fn new(rx: oneshot::Receiver<T>, cancel: CancellationToken) -> Self {
        Self {
            rx,
            cancel,
            terminated: false,
        }
    }

    /// Spawn a blocking operation on a background thread.
    ///
    /// The operation runs under a fresh context that only this handle can cancel.
    #[inline]
    pub fn spawn<F>(f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        Self::spawn_cancellable(FetchContext::new(), move |_| f())
    }

    /// Spawn a blocking, cancellation-aware operation on a background thread.
    ///
    /// `f` receives the context and is expected to poll it at its own
    /// blocking points. Cancelling the handle marks the context cancelled.
    pub fn spawn_cancellable<F>(ctx: FetchContext, f: F) -> Self
    where
        F: FnOnce(&FetchContext) -> T + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let cancel = ctx.token().clone();
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(f(&ctx));
        });
        Self::new(rx, cancel)
    }

    /// Spawn an async operation.
    ///
    /// For operations that are already async and don't need `spawn_blocking`.
    #[inline]
    pub fn spawn_async<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self::spawn_async_cancellable(FetchContext::new(), move |_| future)
    }

    /// Spawn an async operation that is handed its own context.
    pub fn spawn_async_cancellable<F, Fut>(ctx: FetchContext, f: F) -> Self
    where
        F: FnOnce(FetchContext) -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let cancel = ctx.token().clone();
        let future = f(ctx);
        tokio::task::spawn(async move {
            let _ = tx.send(future.await);
        });
        Self::new(rx, cancel)
    }
}

impl<T> AsyncTask<T> {
    /// Request cancellation of the underlying work.
    ///
    /// Never blocks and may be called any number of times. The work stops
    /// whenever it next checks its context.
    #[inline]
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether cancellation was requested for this task.
    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Clone of the task's cancellation token.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, oneshot::error::RecvError>;

    #[inline]
    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        let outcome = ready!(Pin::new(&mut this.rx).poll(cx));
        this.terminated = true;
        Poll::Ready(outcome)
    }
}

impl<T> FusedFuture for AsyncTask<T> {
    fn is_terminated(&self) -> bool {
        self.terminated
    }
}

impl<T> Drop for AsyncTask<T> {
    fn drop(&mut self) {
        if !self.terminated {
            self.cancel.cancel();
        }
    }
}
