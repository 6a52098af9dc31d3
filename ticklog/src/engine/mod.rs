//! Timer and session log engine.
//!
//! This module owns every piece of state with a lifecycle: the stopwatch state
//! machine, the shared session log it feeds, and the wall-clock sampler. Each
//! periodic source is a [`Ticker`] that stops firing as soon as it is cancelled
//! or dropped.

mod clock;
mod format;
mod session_log;
mod stopwatch;
mod ticker;

pub use clock::WallClock;
pub use format::format_duration;
pub use session_log::{SessionLog, SessionSnapshot};
pub use stopwatch::{StopwatchEngine, StopwatchOptions, Tick, TICK_PERIOD};
pub use ticker::Ticker;
