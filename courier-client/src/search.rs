//! Debounced, generation-guarded search
//!
//! Lookups triggered while the user is typing are delayed by a fixed 300 ms
//! so redundant requests are skipped, and every issued request is tagged
//! with a monotonically increasing generation. A response whose generation
//! is no longer the latest is discarded, so a stale response can never
//! overwrite newer results.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::ClientResult;

/// Fixed keystroke debounce
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Debounce-and-discard wrapper around a search callback
#[derive(Debug)]
pub struct DebouncedSearch {
    delay: Duration,
    latest: AtomicU64,
}

impl DebouncedSearch {
    pub fn new() -> Self {
        Self::with_delay(SEARCH_DEBOUNCE)
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            latest: AtomicU64::new(0),
        }
    }

    /// Run `search` after the debounce window, unless a newer call has been
    /// issued meanwhile; returns `Ok(None)` for superseded calls.
    pub async fn run<T, F, Fut>(&self, search: F) -> ClientResult<Option<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        tokio::time::sleep(self.delay).await;
        if self.latest.load(Ordering::SeqCst) != seq {
            return Ok(None);
        }

        let value = search().await?;

        // A newer call may have started while the request was in flight
        if self.latest.load(Ordering::SeqCst) != seq {
            return Ok(None);
        }
        Ok(Some(value))
    }
}

impl Default for DebouncedSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stale_search_is_discarded() {
        let debouncer = DebouncedSearch::with_delay(Duration::from_millis(10));

        let first = debouncer.run(|| async { Ok::<_, crate::ClientError>("old") });
        let second = debouncer.run(|| async { Ok::<_, crate::ClientError>("new") });
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first.unwrap(), None);
        assert_eq!(second.unwrap(), Some("new"));
    }

    #[tokio::test]
    async fn single_search_completes() {
        let debouncer = DebouncedSearch::with_delay(Duration::from_millis(1));
        let result = debouncer
            .run(|| async { Ok::<_, crate::ClientError>(vec!["m-1"]) })
            .await
            .unwrap();
        assert_eq!(result, Some(vec!["m-1"]));
    }
}
