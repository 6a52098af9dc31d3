//! Stopwatch state machine.
//!
//! The engine has two states, idle and running. While running, a [`Ticker`]
//! pushes [`Tick`]s into a channel; the owner of the engine feeds them back
//! through [`StopwatchEngine::tick`]. Every tick carries the generation of the
//! source that produced it, so ticks still queued after `stop()` or `reset()`
//! are recognised as stale and dropped.
//!
//! Stopping leaves the elapsed time on display. Each logged session covers
//! the seconds accumulated since the previous logged stop, so resuming after a
//! stop keeps counting from the paused value without logging a run twice.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, trace};

use super::session_log::SessionLog;
use super::ticker::Ticker;
use crate::models::{Session, StopwatchState, DEFAULT_SESSION_LABEL};

/// One firing of the stopwatch tick source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

/// Time between ticks. Each tick adds one whole second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Configuration for a [`StopwatchEngine`].
#[derive(Debug, Clone)]
pub struct StopwatchOptions {
    /// Description given to every recorded session.
    pub session_label: String,
}

impl StopwatchOptions {
    pub fn new() -> Self {
        Self {
            session_label: DEFAULT_SESSION_LABEL.to_string(),
        }
    }

    /// Set the session description.
    #[must_use]
    pub fn session_label(mut self, label: impl Into<String>) -> Self {
        self.session_label = label.into();
        self
    }
}

impl Default for StopwatchOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Start/stop/reset stopwatch that logs each completed run.
///
/// The engine is the only writer of its elapsed counter. Every transition
/// republishes a [`StopwatchState`] to subscribers.
#[derive(Debug)]
pub struct StopwatchEngine {
    options: StopwatchOptions,

    /// Whole seconds accumulated since the last reset.
    elapsed_seconds: u64,

    /// Part of `elapsed_seconds` already covered by a logged session.
    logged_seconds: u64,

    /// Active tick source. `Some` exactly while running.
    ticker: Option<Ticker>,

    /// Bumped every time a tick source is released.
    generation: u64,

    tick_tx: mpsc::UnboundedSender<Tick>,
    state_tx: watch::Sender<StopwatchState>,
    log: SessionLog,
}

impl StopwatchEngine {
    /// Create an idle engine writing into `log`.
    ///
    /// Returns the engine and the receiver its ticks arrive on. The caller
    /// drives the engine by passing each received tick to [`Self::tick`].
    pub fn new(
        log: SessionLog,
        options: StopwatchOptions,
    ) -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (state_tx, _state_rx) = watch::channel(StopwatchState::default());

        let engine = Self {
            options,
            elapsed_seconds: 0,
            logged_seconds: 0,
            ticker: None,
            generation: 0,
            tick_tx,
            state_tx,
            log,
        };
        (engine, tick_rx)
    }

    /// Begin ticking. Does nothing if already running.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        if self.ticker.is_some() {
            debug!("start ignored: stopwatch already running");
            return;
        }

        let tick = Tick {
            generation: self.generation,
        };
        let tx = self.tick_tx.clone();
        self.ticker = Some(Ticker::spawn("stopwatch", TICK_PERIOD, move || {
            if tx.send(tick).is_err() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        }));

        info!(elapsed_seconds = self.elapsed_seconds, "stopwatch started");
        self.publish();
    }

    /// Apply one tick from the active source.
    ///
    /// Ticks arriving while idle, or produced by a source that has since been
    /// released, leave the state untouched.
    pub fn tick(&mut self, tick: Tick) {
        if self.ticker.is_none() || tick.generation != self.generation {
            trace!(
                tick_generation = tick.generation,
                current_generation = self.generation,
                "dropping stale tick"
            );
            return;
        }

        self.elapsed_seconds += 1;
        trace!(elapsed_seconds = self.elapsed_seconds, "tick");
        self.publish();
    }

    /// Stop ticking and log the run.
    ///
    /// The seconds accumulated since the previous logged stop become a new
    /// [`Session`] at the head of the log, and that session is returned. The
    /// elapsed time stays as it was. Stopping with nothing new to log, or
    /// while idle, records nothing.
    pub fn stop(&mut self) -> Option<Session> {
        if !self.release_ticker() {
            debug!("stop ignored: stopwatch not running");
            return None;
        }

        let unlogged = self.elapsed_seconds - self.logged_seconds;
        let session = if unlogged > 0 {
            let session = Session::new(self.options.session_label.clone(), unlogged);
            self.log.record(session.clone());
            self.logged_seconds = self.elapsed_seconds;
            Some(session)
        } else {
            debug!("no time since the last logged stop, nothing to record");
            None
        };

        info!(elapsed_seconds = self.elapsed_seconds, "stopwatch stopped");
        self.publish();
        session
    }

    /// Stop ticking and discard the elapsed time without logging it.
    pub fn reset(&mut self) {
        self.release_ticker();
        let discarded = std::mem::take(&mut self.elapsed_seconds) - self.logged_seconds;
        self.logged_seconds = 0;
        info!(discarded_seconds = discarded, "stopwatch reset");
        self.publish();
    }

    /// Current state snapshot.
    pub const fn state(&self) -> StopwatchState {
        StopwatchState {
            running: self.ticker.is_some(),
            elapsed_seconds: self.elapsed_seconds,
        }
    }

    pub const fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Observe every state change.
    pub fn subscribe(&self) -> watch::Receiver<StopwatchState> {
        self.state_tx.subscribe()
    }

    /// Cancel the tick source, if any. Returns whether one was running.
    fn release_ticker(&mut self) -> bool {
        match self.ticker.take() {
            Some(ticker) => {
                ticker.cancel();
                self.generation += 1;
                true
            }
            None => false,
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::format_duration;
    use tokio::time::Instant;

    fn engine() -> (StopwatchEngine, mpsc::UnboundedReceiver<Tick>, SessionLog) {
        let log = SessionLog::new();
        let (engine, ticks) = StopwatchEngine::new(log.clone(), StopwatchOptions::new());
        (engine, ticks, log)
    }

    /// Wait for `n` ticks from the live source and apply them.
    async fn run_ticks(
        engine: &mut StopwatchEngine,
        ticks: &mut mpsc::UnboundedReceiver<Tick>,
        n: u64,
    ) {
        for _ in 0..n {
            let tick = ticks.recv().await.unwrap();
            engine.tick(tick);
        }
    }

    #[test]
    fn starts_idle_at_zero() {
        let (engine, _ticks, log) = engine();
        assert_eq!(engine.state(), StopwatchState::default());
        assert!(!engine.is_running());
        assert!(log.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn accumulates_one_second_per_tick() {
        let (mut engine, mut ticks, _log) = engine();
        engine.reset();
        engine.start();

        run_ticks(&mut engine, &mut ticks, 4).await;

        assert_eq!(engine.elapsed_seconds(), 4);
        assert!(engine.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn resume_after_stop_continues_from_paused_value() {
        let (mut engine, mut ticks, log) = engine();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 2).await;
        engine.stop();
        let e0 = engine.elapsed_seconds();
        assert_eq!(e0, 2);

        engine.start();
        run_ticks(&mut engine, &mut ticks, 3).await;

        assert_eq!(engine.elapsed_seconds(), e0 + 3);
        assert_eq!(engine.stop().unwrap().duration_seconds, 3);
        assert_eq!(log.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_keeps_the_final_time_on_display() {
        let (mut engine, mut ticks, _log) = engine();
        let mut state = engine.subscribe();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 5).await;

        engine.stop();

        assert_eq!(format_duration(engine.elapsed_seconds()), "00:00:05");
        assert_eq!(
            *state.borrow_and_update(),
            StopwatchState {
                running: false,
                elapsed_seconds: 5,
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn restart_without_ticks_records_nothing_new() {
        let (mut engine, mut ticks, log) = engine();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 4).await;
        engine.stop();

        engine.start();
        assert!(engine.stop().is_none());

        assert_eq!(log.len(), 1);
        assert_eq!(engine.elapsed_seconds(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_at_zero_records_nothing() {
        let (mut engine, _ticks, log) = engine();
        engine.start();

        assert!(engine.stop().is_none());
        assert!(log.is_empty());
        assert!(!engine.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn stop_records_one_session_at_head() {
        let (mut engine, mut ticks, log) = engine();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 7).await;

        let session = engine.stop().unwrap();

        assert_eq!(session.duration_seconds, 7);
        assert_eq!(session.description, DEFAULT_SESSION_LABEL);
        assert_eq!(log.len(), 1);
        assert_eq!(log.head().unwrap(), session);
        assert!(!engine.is_running());
    }

    #[test]
    fn stop_while_idle_is_a_no_op() {
        let (mut engine, _ticks, log) = engine();
        assert!(engine.stop().is_none());
        assert!(log.is_empty());
        assert_eq!(engine.state(), StopwatchState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_discards_without_logging() {
        let (mut engine, mut ticks, log) = engine();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 9).await;

        engine.reset();

        assert_eq!(engine.elapsed_seconds(), 0);
        assert!(!engine.is_running());
        assert!(log.is_empty());

        // Reset while idle is still fine.
        engine.reset();
        assert_eq!(engine.state(), StopwatchState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn reset_after_stop_starts_a_fresh_count() {
        let (mut engine, mut ticks, log) = engine();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 6).await;
        engine.stop();

        engine.reset();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 2).await;

        assert_eq!(engine.elapsed_seconds(), 2);
        assert_eq!(engine.stop().unwrap().duration_seconds, 2);
        assert_eq!(log.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn each_tick_is_one_wall_second() {
        let (mut engine, mut ticks, _log) = engine();
        let begin = Instant::now();

        engine.start();
        run_ticks(&mut engine, &mut ticks, 4).await;
        let session = engine.stop().unwrap();

        assert_eq!(begin.elapsed(), TICK_PERIOD * 4);
        assert_eq!(session.duration_seconds, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn double_start_keeps_single_cadence() {
        let (mut engine, mut ticks, _log) = engine();
        let begin = Instant::now();

        engine.start();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 3).await;

        assert_eq!(engine.elapsed_seconds(), 3);
        assert_eq!(begin.elapsed(), Duration::from_secs(3));
        assert!(ticks.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn late_tick_after_stop_is_ignored() {
        let (mut engine, mut ticks, _log) = engine();
        engine.start();
        let late = ticks.recv().await.unwrap();
        engine.tick(late);

        engine.stop();
        engine.tick(late);

        assert_eq!(engine.elapsed_seconds(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn late_tick_after_reset_is_ignored() {
        let (mut engine, mut ticks, _log) = engine();
        engine.start();
        let late = ticks.recv().await.unwrap();
        engine.tick(late);

        engine.reset();
        engine.tick(late);
        assert_eq!(engine.elapsed_seconds(), 0);

        // A stale tick from the old source must not count for the new run.
        engine.start();
        engine.tick(late);
        assert_eq!(engine.elapsed_seconds(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_cancels_the_source() {
        let (mut engine, mut ticks, _log) = engine();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 1).await;

        engine.stop();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(ticks.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_state_changes() {
        let (mut engine, mut ticks, _log) = engine();
        let mut state = engine.subscribe();

        engine.start();
        assert!(state.borrow_and_update().running);

        run_ticks(&mut engine, &mut ticks, 2).await;
        assert_eq!(state.borrow_and_update().elapsed_seconds, 2);

        engine.stop();
        assert!(!state.borrow_and_update().running);

        engine.reset();
        assert_eq!(*state.borrow_and_update(), StopwatchState::default());
    }

    #[tokio::test(start_paused = true)]
    async fn uses_configured_label() {
        let log = SessionLog::new();
        let options = StopwatchOptions::new().session_label("Focus block");
        let (mut engine, mut ticks) = StopwatchEngine::new(log.clone(), options);

        engine.start();
        run_ticks(&mut engine, &mut ticks, 1).await;
        engine.stop();

        assert_eq!(log.head().unwrap().description, "Focus block");
    }

    #[tokio::test(start_paused = true)]
    async fn two_runs_build_the_log_newest_first() {
        let (mut engine, mut ticks, log) = engine();

        engine.reset();
        engine.start();
        run_ticks(&mut engine, &mut ticks, 5).await;
        let first = engine.stop().unwrap();
        assert_eq!(format_duration(engine.elapsed_seconds()), "00:00:05");
        assert_eq!(first.duration_seconds, 5);
        assert_eq!(log.head().unwrap().duration_seconds, 5);

        engine.start();
        run_ticks(&mut engine, &mut ticks, 3).await;
        engine.stop().unwrap();

        let entries = log.all();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].duration_seconds, 3);
        assert_eq!(entries[1].duration_seconds, 5);
        assert!(entries[0].timestamp >= entries[1].timestamp);
    }
}
