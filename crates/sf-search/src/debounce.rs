//! A generic debouncer over a tokio timer.
//!
//! The debouncer is an explicit two-state machine:
//!
//! ```text
//!           trigger(value)
//!   Idle ──────────────────► Pending { deadline, value }
//!     ▲                         │          │
//!     │        cancel()         │          │ trigger(value')
//!     ├─────────────────────────┤          │ (deadline resets,
//!     │    deadline elapses:    │          │  value' replaces value)
//!     │    action(value)        │          ▼
//!     └─────────────────────────┴──── Pending { deadline', value' }
//! ```
//!
//! A dedicated task owns the state and the timer; the [`Debouncer`] handle
//! feeds it commands over an unbounded channel. Dropping the handle closes
//! the channel, which ends the task and discards any pending call.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tracing::trace;

/// Commands sent from the handle to the debounce task.
enum Command<T> {
    /// Replace the pending value and restart the window.
    Trigger(T),
    /// Discard the pending value, if any.
    Cancel,
}

/// Coalesces bursts of calls into one delayed invocation.
///
/// `trigger(value)` records `value` as the pending call and restarts the
/// debounce window; an earlier pending call is dropped, never delivered.
/// When the window elapses with no further trigger, the action runs exactly
/// once with the most recent value. For a burst of N triggers each within
/// the window of the previous, the action therefore fires at most once,
/// with the last value of the burst.
///
/// # Ordering
///
/// The action runs on the debounce task, after the rest of the current
/// scheduling step settles - even with a zero window, a trigger never
/// invokes the action synchronously.
///
/// # Teardown
///
/// [`cancel`](Self::cancel) discards the pending call and is a no-op when
/// nothing is pending. Dropping the handle cancels implicitly: the task
/// drains any already-queued commands and exits without firing.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use sf_search::Debouncer;
///
/// # async fn example() {
/// let debouncer = Debouncer::new(Duration::from_millis(100), |query: String| {
///     println!("searching for {query}");
/// });
///
/// debouncer.trigger("s".to_owned());
/// debouncer.trigger("sh".to_owned());
/// debouncer.trigger("shirt".to_owned());
/// // 100ms later the action runs once, with "shirt".
/// # }
/// ```
pub struct Debouncer<T> {
    /// Command channel into the debounce task.
    ///
    /// Dropping this sender is the shutdown signal.
    command_tx: mpsc::UnboundedSender<Command<T>>,
}

impl<T> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("is_running", &!self.command_tx.is_closed())
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Debouncer<T> {
    /// Creates a debouncer that invokes `action` once `delay` has elapsed
    /// after the most recent trigger.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, as the debounce task is
    /// spawned immediately.
    #[must_use]
    pub fn new<F>(delay: Duration, action: F) -> Self
    where
        F: FnMut(T) + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_debounce_loop(delay, action, command_rx));
        Self { command_tx }
    }

    /// Records `value` as the pending call and restarts the window.
    ///
    /// Any previously pending call is dropped. Triggering after the task
    /// has stopped is a no-op.
    pub fn trigger(&self, value: T) {
        let _ = self.command_tx.send(Command::Trigger(value));
    }

    /// Discards the pending call, if any.
    ///
    /// After `cancel` returns, the previously pending call will not fire.
    /// No-op when nothing is pending or the task has stopped.
    pub fn cancel(&self) {
        let _ = self.command_tx.send(Command::Cancel);
    }
}

/// Runs the debounce state machine until every handle is dropped.
async fn run_debounce_loop<T, F>(
    delay: Duration,
    mut action: F,
    mut command_rx: mpsc::UnboundedReceiver<Command<T>>,
) where
    F: FnMut(T),
{
    // The timer is re-armed on every trigger; while `pending` is None the
    // timer arm is disabled and its value is irrelevant.
    let timer = time::sleep(delay);
    tokio::pin!(timer);
    let mut pending: Option<T> = None;

    loop {
        tokio::select! {
            command = command_rx.recv() => match command {
                Some(Command::Trigger(value)) => {
                    pending = Some(value);
                    timer.as_mut().reset(Instant::now() + delay);
                }
                Some(Command::Cancel) => {
                    pending = None;
                }
                None => break,
            },
            () = timer.as_mut(), if pending.is_some() => {
                if let Some(value) = pending.take() {
                    action(value);
                }
            }
        }
    }

    trace!("Debounce task stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Collects `(value, virtual elapsed)` pairs from the action.
    fn recording_sink<T: Send + 'static>() -> (
        Arc<Mutex<Vec<(T, Duration)>>>,
        impl FnMut(T) + Send + 'static,
    ) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let start = Instant::now();
        let action = move |value: T| {
            sink.lock().unwrap().push((value, start.elapsed()));
        };
        (calls, action)
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_fires_once_with_last_arguments() {
        let (calls, action) = recording_sink();
        let debouncer = Debouncer::new(Duration::from_millis(100), action);

        debouncer.trigger(1);
        time::sleep(Duration::from_millis(10)).await;
        debouncer.trigger(2);
        time::sleep(Duration::from_millis(10)).await;
        debouncer.trigger(3);
        time::sleep(Duration::from_millis(200)).await;

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 3);
        // Last trigger at t=20ms plus the 100ms window.
        assert_eq!(calls[0].1, Duration::from_millis(120));
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_fire_separately() {
        let (calls, action) = recording_sink();
        let debouncer = Debouncer::new(Duration::from_millis(50), action);

        debouncer.trigger("first");
        time::sleep(Duration::from_millis(100)).await;
        debouncer.trigger("second");
        time::sleep(Duration::from_millis(100)).await;

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "first");
        assert_eq!(calls[1].0, "second");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let (calls, action) = recording_sink();
        let debouncer = Debouncer::new(Duration::from_millis(100), action);

        debouncer.trigger(1);
        time::sleep(Duration::from_millis(10)).await;
        debouncer.cancel();
        time::sleep(Duration::from_millis(300)).await;

        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_without_pending_is_noop() {
        let (calls, action) = recording_sink::<u32>();
        let debouncer = Debouncer::new(Duration::from_millis(100), action);

        debouncer.cancel();
        time::sleep(Duration::from_millis(300)).await;

        assert!(calls.lock().unwrap().is_empty());
        // Still usable after a spurious cancel.
        debouncer.trigger(7);
        time::sleep(Duration::from_millis(150)).await;
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_trigger_after_cancel_still_fires() {
        let (calls, action) = recording_sink();
        let debouncer = Debouncer::new(Duration::from_millis(100), action);

        debouncer.trigger(1);
        debouncer.cancel();
        debouncer.trigger(2);
        time::sleep(Duration::from_millis(200)).await;

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_defers_to_next_scheduling_step() {
        let fired = Arc::new(AtomicUsize::new(0));
        let sink = Arc::clone(&fired);
        let debouncer = Debouncer::new(Duration::ZERO, move |_: ()| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.trigger(());
        // Not synchronous: the action has not run yet.
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        time::sleep(Duration::from_millis(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_call() {
        let (calls, action) = recording_sink();
        let debouncer = Debouncer::new(Duration::from_millis(100), action);

        debouncer.trigger(1);
        time::sleep(Duration::from_millis(10)).await;
        drop(debouncer);
        time::sleep(Duration::from_millis(300)).await;

        assert!(calls.lock().unwrap().is_empty());
    }
}
