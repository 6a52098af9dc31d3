//! Session model representing one completed, logged timing interval.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label used for stopwatch sessions when none is configured.
pub const DEFAULT_SESSION_LABEL: &str = "Stopwatch session";

/// A session is a finalized stopwatch run with a positive duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Unique, time-ordered identifier.
    pub id: Uuid,
    /// Fixed label identifying the entry as a timed session.
    pub description: String,
    /// Whole seconds on the stopwatch when the session was finalized.
    pub duration_seconds: u64,
    /// When the session was finalized.
    pub timestamp: DateTime<Utc>,
}

impl Session {
    /// Create a session finalized now.
    pub fn new(description: impl Into<String>, duration_seconds: u64) -> Self {
        Self::finalized_at(description, duration_seconds, Utc::now())
    }

    /// Create a session finalized at a specific point in time.
    pub fn finalized_at(
        description: impl Into<String>,
        duration_seconds: u64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            description: description.into(),
            duration_seconds,
            timestamp,
        }
    }
}
