//! The single active search session and its fallback timer.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// A scheduled fallback retry. Dropping it cancels the retry.
#[derive(Debug)]
pub struct FallbackTimer {
    /// Query id the retry belongs to.
    query_id: u64,
    /// Sleep-then-run task.
    handle: JoinHandle<()>,
}

impl FallbackTimer {
    /// Query id this timer was scheduled for.
    #[must_use]
    pub const fn query_id(&self) -> u64 {
        self.query_id
    }

    /// Whether the retry task has completed or been aborted.
    #[cfg(test)]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for FallbackTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Tracks which query currently owns the search box.
///
/// Details:
/// - At most one fallback timer exists; it is aborted by [`SearchSession::begin`], by
///   scheduling another one and when the session is dropped.
#[derive(Debug, Default)]
pub struct SearchSession {
    /// Id of the newest query, `None` before the first one.
    current: Option<u64>,
    /// Pending fallback retry.
    timer: Option<FallbackTimer>,
}

impl SearchSession {
    /// Empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Make `query_id` the active query, cancelling any pending fallback.
    ///
    /// Inputs:
    /// - `query_id`: Id of the query just submitted.
    pub fn begin(&mut self, query_id: u64) {
        if let Some(t) = self.timer.take() {
            debug!(
                cancelled = t.query_id(),
                by = query_id,
                "cancelling pending fallback"
            );
        }
        self.current = Some(query_id);
    }

    /// Whether `query_id` is the active query.
    #[must_use]
    pub fn is_current(&self, query_id: u64) -> bool {
        self.current == Some(query_id)
    }

    /// Whether a fallback retry is scheduled and has not fired yet.
    #[cfg(test)]
    #[must_use]
    pub fn has_pending_fallback(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// What: Run `retry` after `delay`, replacing any scheduled retry.
    ///
    /// Inputs:
    /// - `query_id`: Query the retry belongs to.
    /// - `delay`: Wait before running.
    /// - `retry`: Work to run when the delay elapses.
    ///
    /// Output:
    /// - `true` if scheduled; `false` when `query_id` is no longer the active query.
    ///
    /// Details:
    /// - Must be called from within a tokio runtime.
    pub fn schedule_fallback<F>(&mut self, query_id: u64, delay: Duration, retry: F) -> bool
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if !self.is_current(query_id) {
            debug!(query_id, "stale query, fallback not scheduled");
            return false;
        }
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            retry.await;
        });
        self.timer = Some(FallbackTimer { query_id, handle });
        true
    }

    /// Abort any pending fallback without changing the active query.
    #[cfg(test)]
    pub fn cancel(&mut self) {
        self.timer = None;
    }
}
