//! Observable stopwatch state.

use serde::{Deserialize, Serialize};

/// Current position of the stopwatch state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopwatchStatus {
    /// Not ticking. Covers both a fresh/reset stopwatch and a paused one.
    Idle,
    /// Ticking once per period.
    Running,
}

impl StopwatchStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
        }
    }
}

impl std::fmt::Display for StopwatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Snapshot of the stopwatch published to observers after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StopwatchState {
    /// Whether the periodic tick is currently active.
    pub running: bool,
    /// Whole seconds accumulated since the last reset.
    pub elapsed_seconds: u64,
}

impl StopwatchState {
    pub const fn status(&self) -> StopwatchStatus {
        if self.running {
            StopwatchStatus::Running
        } else {
            StopwatchStatus::Idle
        }
    }
}
