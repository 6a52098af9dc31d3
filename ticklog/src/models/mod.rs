//! Data models shared by the engine and the terminal front end.

mod session;
mod stopwatch;

pub use session::{Session, DEFAULT_SESSION_LABEL};
pub use stopwatch::{StopwatchState, StopwatchStatus};
