//! The search pipeline: canonical search state with streamed snapshots.
//!
//! This module provides [`SearchPipeline`], the headless counterpart of a
//! search bar plus category selector. It owns the one authoritative
//! [`SearchState`] and emits an owned snapshot after every effective change,
//! so consumers re-filter exactly when the state actually moves:
//!
//! - query updates are debounced (window from
//!   [`SearchConfig::debounce_ms`]); only the last keystroke of a burst
//!   commits
//! - category updates apply immediately
//!
//! Because the canonical state lives inside a single task, a debounced
//! query that commits after a category change observes the new category.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::trace;

use sf_core::{SearchConfig, SearchState};

use crate::debounce::Debouncer;

/// Default capacity for the snapshot channel.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// State updates applied by the pipeline task.
enum Update {
    /// Commit a debounced query.
    Query(String),
    /// Apply a category selection immediately.
    Category(String),
}

/// Owns the canonical search state and streams snapshots on change.
///
/// # Lifecycle
///
/// 1. **Creation**: `SearchPipeline::new()` spawns the state-owning task and
///    the debounce task.
/// 2. **Updates**: [`set_query`](Self::set_query) feeds the debouncer;
///    [`set_category`](Self::set_category) applies directly.
/// 3. **Consumption**: [`recv`](Self::recv) yields a [`SearchState`]
///    snapshot after each effective change.
/// 4. **Teardown**: dropping the pipeline cancels any pending debounced
///    query and stops both tasks; nothing fires after disposal.
///
/// # Examples
///
/// ```no_run
/// use sf_core::SearchConfig;
/// use sf_search::SearchPipeline;
///
/// # async fn example() {
/// let mut pipeline = SearchPipeline::new(&SearchConfig::default());
///
/// pipeline.set_query("shirt");
///
/// if let Some(state) = pipeline.recv().await {
///     assert_eq!(state.query, "shirt");
/// }
/// # }
/// ```
pub struct SearchPipeline {
    /// Debouncer feeding committed queries into the pipeline task.
    debouncer: Debouncer<String>,

    /// Direct channel into the pipeline task, bypassing the debouncer.
    update_tx: mpsc::UnboundedSender<Update>,

    /// Snapshot receiver for the consumer.
    state_rx: mpsc::Receiver<SearchState>,
}

impl std::fmt::Debug for SearchPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchPipeline")
            .field("is_running", &!self.update_tx.is_closed())
            .finish_non_exhaustive()
    }
}

impl SearchPipeline {
    /// Creates a pipeline with the given search configuration.
    ///
    /// The initial state is [`SearchState::default()`]: an empty query and
    /// the wildcard category. No snapshot is emitted until something
    /// changes.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as the background tasks
    /// are spawned immediately.
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = mpsc::channel(DEFAULT_CHANNEL_CAPACITY);

        // Committed queries loop back into the same update channel the
        // category setter uses, so one task applies every change in order.
        let debounce_tx = update_tx.clone();
        let debouncer = Debouncer::new(
            Duration::from_millis(config.debounce_ms),
            move |query: String| {
                let _ = debounce_tx.send(Update::Query(query));
            },
        );

        tokio::spawn(run_pipeline_loop(update_rx, state_tx));

        Self {
            debouncer,
            update_tx,
            state_rx,
        }
    }

    /// Submits a query update through the debounce window.
    ///
    /// Rapid successive calls coalesce; only the last value of a burst
    /// commits and produces a snapshot.
    pub fn set_query(&self, query: impl Into<String>) {
        self.debouncer.trigger(query.into());
    }

    /// Applies a category selection immediately.
    pub fn set_category(&self, category: impl Into<String>) {
        let _ = self.update_tx.send(Update::Category(category.into()));
    }

    /// Discards a not-yet-committed query update, if any.
    ///
    /// Corresponds to tearing down the search input mid-burst: the pending
    /// query never commits and no snapshot is emitted for it.
    pub fn cancel_pending(&self) {
        self.debouncer.cancel();
    }

    /// Receives the next state snapshot.
    ///
    /// Returns `None` once the pipeline has stopped.
    pub async fn recv(&mut self) -> Option<SearchState> {
        self.state_rx.recv().await
    }

    /// Tries to receive a state snapshot without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`mpsc::error::TryRecvError::Empty`] when no snapshot is
    /// ready, or [`mpsc::error::TryRecvError::Disconnected`] once the
    /// pipeline has stopped.
    pub fn try_recv(&mut self) -> Result<SearchState, mpsc::error::TryRecvError> {
        self.state_rx.try_recv()
    }
}

/// Applies updates to the canonical state and emits snapshots.
async fn run_pipeline_loop(
    mut update_rx: mpsc::UnboundedReceiver<Update>,
    state_tx: mpsc::Sender<SearchState>,
) {
    let mut state = SearchState::default();

    while let Some(update) = update_rx.recv().await {
        match update {
            Update::Query(query) => state.query = query,
            Update::Category(category) => state.category = category,
        }
        if state_tx.send(state.clone()).await.is_err() {
            // Consumer went away; no point applying further updates.
            break;
        }
    }

    trace!("Search pipeline stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::WILDCARD_CATEGORY;
    use tokio::time;

    #[tokio::test(start_paused = true)]
    async fn test_category_applies_immediately() {
        let mut pipeline = SearchPipeline::new(&SearchConfig::default());

        pipeline.set_category("electronics");
        let state = pipeline.recv().await.expect("pipeline should emit");

        assert_eq!(state.category, "electronics");
        assert_eq!(state.query, "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_commits_after_debounce_window() {
        let mut pipeline = SearchPipeline::new(&SearchConfig::default());

        pipeline.set_query("shirt");
        // Nothing is emitted until the window elapses.
        assert!(pipeline.try_recv().is_err());

        let state = pipeline.recv().await.expect("pipeline should emit");
        assert_eq!(state.query, "shirt");
        assert_eq!(state.category, WILDCARD_CATEGORY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_burst_emits_single_snapshot() {
        let mut pipeline = SearchPipeline::new(&SearchConfig { debounce_ms: 100 });

        pipeline.set_query("s");
        time::sleep(Duration::from_millis(10)).await;
        pipeline.set_query("sh");
        time::sleep(Duration::from_millis(10)).await;
        pipeline.set_query("shirt");

        let state = pipeline.recv().await.expect("pipeline should emit");
        assert_eq!(state.query, "shirt");

        // The earlier keystrokes never produced snapshots.
        time::sleep(Duration::from_millis(300)).await;
        assert!(pipeline.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounced_query_observes_new_category() {
        let mut pipeline = SearchPipeline::new(&SearchConfig { debounce_ms: 100 });

        pipeline.set_query("shirt");
        time::sleep(Duration::from_millis(10)).await;
        pipeline.set_category("men's clothing");

        // The category change lands first, with the old (empty) query.
        let first = pipeline.recv().await.expect("pipeline should emit");
        assert_eq!(first.category, "men's clothing");
        assert_eq!(first.query, "");

        // The debounced query commits afterwards and sees the new category.
        let second = pipeline.recv().await.expect("pipeline should emit");
        assert_eq!(second.query, "shirt");
        assert_eq!(second.category, "men's clothing");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_discards_query() {
        let mut pipeline = SearchPipeline::new(&SearchConfig::default());

        pipeline.set_query("shirt");
        time::sleep(Duration::from_millis(10)).await;
        pipeline.cancel_pending();
        time::sleep(Duration::from_millis(300)).await;

        assert!(pipeline.try_recv().is_err());
    }
}
