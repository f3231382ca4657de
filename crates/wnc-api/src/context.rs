// Per-call request context: deadline + cancellation.
//
// Every client call takes a `RequestContext`. An in-flight request races
// the context's deadline and cancellation token; whichever fires first
// aborts the exchange by dropping its future.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::error::Error;

/// Deadline and cancellation scope for one or more client calls.
///
/// Cheap to clone; clones share the same cancellation token.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl RequestContext {
    /// A context with no deadline that is never cancelled unless
    /// [`cancel`](Self::cancel) is called.
    pub fn background() -> Self {
        Self::default()
    }

    /// Bound this context to `timeout` from now.
    ///
    /// An existing earlier deadline is kept. A timeout too large to
    /// represent as an instant leaves the context as it is.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(at) => self.with_deadline(at),
            None => self,
        }
    }

    /// Bound this context to an absolute instant.
    ///
    /// An existing earlier deadline is kept.
    pub fn with_deadline(mut self, at: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(at, |current| current.min(at)));
        self
    }

    /// Replace the cancellation token.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// A child scope: same deadline, a child token that is cancelled when
    /// this context is, but can also be cancelled on its own.
    pub fn child(&self) -> Self {
        Self {
            deadline: self.deadline,
            cancel: self.cancel.child_token(),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Cancel this context (and every child).
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Fail fast without I/O if the context is already done.
    ///
    /// Cancellation is reported before an elapsed deadline.
    pub fn check(&self) -> Result<(), Error> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if self.deadline.is_some_and(|at| at <= Instant::now()) {
            return Err(Error::RequestTimeout);
        }
        Ok(())
    }

    /// Drive `fut` to completion unless the context finishes first.
    ///
    /// When the deadline or the token wins, `fut` is dropped, which aborts
    /// whatever I/O it had in flight.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, Error>
    where
        F: Future,
    {
        self.check()?;

        let deadline = async {
            match self.deadline {
                Some(at) => tokio::time::sleep_until(at).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(Error::Cancelled),
            () = deadline => Err(Error::RequestTimeout),
            out = fut => Ok(out),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn background_runs_to_completion() {
        let ctx = RequestContext::background();
        assert!(ctx.check().is_ok());
        assert_eq!(ctx.run(async { 7 }).await.unwrap(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn expired_deadline_fails_without_polling() {
        let ctx = RequestContext::background().with_timeout(Duration::from_millis(10));
        tokio::time::advance(Duration::from_millis(20)).await;

        let polled = std::sync::atomic::AtomicBool::new(false);
        let result = ctx
            .run(async { polled.store(true, std::sync::atomic::Ordering::SeqCst) })
            .await;

        assert!(matches!(result, Err(Error::RequestTimeout)));
        assert!(!polled.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_aborts_pending_future() {
        let ctx = RequestContext::background().with_timeout(Duration::from_secs(1));
        let result = ctx.run(std::future::pending::<()>()).await;
        assert!(matches!(result, Err(Error::RequestTimeout)));
    }

    #[tokio::test]
    async fn cancellation_is_distinct_from_timeout() {
        let ctx = RequestContext::background();
        let handle = ctx.clone();
        tokio::spawn(async move { handle.cancel() });

        let result = ctx.run(std::future::pending::<()>()).await;
        assert!(matches!(result, Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn parent_cancel_reaches_child() {
        let parent = RequestContext::background();
        let child = parent.child();
        parent.cancel();
        assert!(matches!(child.check(), Err(Error::Cancelled)));
    }

    #[tokio::test]
    async fn child_cancel_does_not_reach_parent() {
        let parent = RequestContext::background();
        let child = parent.child();
        child.cancel();
        assert!(parent.check().is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_only_tightens() {
        let ctx = RequestContext::background().with_timeout(Duration::from_secs(1));
        let first = ctx.deadline().unwrap();
        let ctx = ctx.with_timeout(Duration::from_secs(60));
        assert_eq!(ctx.deadline(), Some(first));

        let ctx = ctx.with_timeout(Duration::from_millis(100));
        assert!(ctx.deadline().unwrap() < first);
    }

    #[tokio::test]
    async fn unrepresentable_timeout_means_unbounded() {
        let ctx = RequestContext::background().with_timeout(Duration::MAX);
        assert_eq!(ctx.deadline(), None);
        assert!(ctx.check().is_ok());
        assert_eq!(ctx.run(async { 1 }).await.unwrap(), 1);

        let bounded = RequestContext::background().with_timeout(Duration::from_secs(5));
        let at = bounded.deadline();
        assert_eq!(bounded.with_timeout(Duration::MAX).deadline(), at);
    }
}
