//! Request scope carrying a deadline and a cancellation signal.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::sources::SourceError;

/// Deadline and cancellation shared by every call made for one request.
///
/// Cloning yields a handle to the same scope. Use [`child_with_timeout`]
/// to derive a narrower scope.
///
/// [`child_with_timeout`]: RequestContext::child_with_timeout
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl RequestContext {
    /// A scope without deadline that is never cancelled unless asked to
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Wrap a cancellation token owned by the caller
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline, `None` when there is no deadline
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Derive a scope that ends at `min(own deadline, now + timeout)`.
    ///
    /// Cancelling this scope cancels the child; cancelling the child leaves
    /// this scope untouched.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let ceiling = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(deadline) => deadline.min(ceiling),
            None => ceiling,
        };

        Self {
            deadline: Some(deadline),
            cancel: self.cancel.child_token(),
        }
    }

    /// Cancel this scope when the returned guard is dropped
    pub fn cancel_on_drop(&self) -> DropGuard {
        self.cancel.clone().drop_guard()
    }

    /// Drive `fut` to completion inside this scope.
    ///
    /// Resolves to [`SourceError::Cancelled`] or [`SourceError::DeadlineExceeded`]
    /// if the scope ends first; the future is dropped in that case.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, SourceError>
    where
        F: Future<Output = Result<T, SourceError>>,
    {
        let deadline = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending().await,
            }
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(SourceError::Cancelled),
            _ = deadline => Err(SourceError::DeadlineExceeded),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_child_uses_ceiling_without_parent_deadline() {
        let parent = RequestContext::new();
        let child = parent.child_with_timeout(Duration::from_secs(6));

        assert_eq!(child.remaining(), Some(Duration::from_secs(6)));
        assert!(parent.deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_child_keeps_earlier_parent_deadline() {
        let parent = RequestContext::with_timeout(Duration::from_secs(1));
        let child = parent.child_with_timeout(Duration::from_secs(6));
        assert_eq!(child.deadline(), parent.deadline());

        let parent = RequestContext::with_timeout(Duration::from_secs(60));
        let child = parent.child_with_timeout(Duration::from_secs(6));
        assert_eq!(child.remaining(), Some(Duration::from_secs(6)));
    }

    #[test]
    fn test_cancellation_flows_down_only() {
        let parent = RequestContext::new();
        let child = parent.child_with_timeout(Duration::from_secs(6));
        child.cancel();
        assert!(!parent.is_cancelled());

        let other = parent.child_with_timeout(Duration::from_secs(6));
        parent.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_drop_guard_cancels_scope() {
        let ctx = RequestContext::new();
        {
            let _guard = ctx.cancel_on_drop();
            assert!(!ctx.is_cancelled());
        }
        assert!(ctx.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_times_out() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(1));
        let result: Result<(), _> = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok(())
            })
            .await;

        assert_eq!(result, Err(SourceError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_run_observes_cancellation() {
        let ctx = RequestContext::new();
        ctx.cancel();
        let result: Result<(), _> = ctx.run(std::future::pending()).await;

        assert_eq!(result, Err(SourceError::Cancelled));
    }

    #[tokio::test]
    async fn test_run_passes_result_through() {
        let ctx = RequestContext::with_timeout(Duration::from_secs(1));

        assert_eq!(ctx.run(async { Ok(7) }).await, Ok(7));
        assert_eq!(
            ctx.run(async { Err::<i32, _>(SourceError::transport("reset")) }).await,
            Err(SourceError::transport("reset"))
        );
    }
}
