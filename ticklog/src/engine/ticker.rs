//! Scoped periodic tick sources.
//!
//! A [`Ticker`] owns the task driving a recurring callback. The task is
//! aborted when the ticker is cancelled or dropped, so a tick source can never
//! outlive the state that started it.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;
use tokio_stream::StreamExt;
use tracing::{debug, trace};

/// Handle to a running periodic source.
#[derive(Debug)]
pub struct Ticker {
    /// Name used in log output.
    name: &'static str,
    /// Task firing the callback. `None` once released.
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start calling `on_tick` once per `period`.
    ///
    /// The first call happens one full period after spawning. Late ticks are
    /// delayed rather than bursted, so the cadence drifts instead of catching
    /// up. Returning [`ControlFlow::Break`] from the callback ends the source.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero or if called outside a tokio runtime.
    pub fn spawn<F>(name: &'static str, period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let first = Instant::now() + period;

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            let mut ticks = IntervalStream::new(interval);
            while ticks.next().await.is_some() {
                if on_tick().is_break() {
                    trace!(ticker = name, "tick sink closed, ending source");
                    break;
                }
            }
        });

        debug!(ticker = name, period_ms = period.as_millis(), "ticker started");

        Self {
            name,
            handle: Some(handle),
        }
    }

    /// Stop the source.
    ///
    /// On a current-thread runtime no callback runs after this returns. On a
    /// multi-thread runtime a callback already in progress may still finish,
    /// so consumers must tolerate one late tick (see the generation check in
    /// `StopwatchEngine::tick`).
    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(ticker = self.name, "ticker released");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.release();
    }
}
