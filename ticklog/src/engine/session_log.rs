//! Shared, process-lifetime log of completed sessions.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::models::Session;

/// Immutable view of the log, newest session first.
pub type SessionSnapshot = Arc<Vec<Session>>;

/// Ordered, append-at-head store of completed sessions.
///
/// Cloning yields another handle to the same log. [`SessionLog::record`] is
/// the only mutation; readers get whole snapshots and never observe a
/// partially applied insert.
#[derive(Debug, Clone)]
pub struct SessionLog {
    tx: Arc<watch::Sender<SessionSnapshot>>,
}

impl SessionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::default());
        Self { tx: Arc::new(tx) }
    }

    /// Insert a session at the head and republish the log.
    ///
    /// Zero-duration sessions are ignored. Returns whether the session was
    /// recorded.
    pub fn record(&self, session: Session) -> bool {
        if session.duration_seconds == 0 {
            debug!(session_id = %session.id, "ignoring zero-duration session");
            return false;
        }

        info!(
            session_id = %session.id,
            duration_seconds = session.duration_seconds,
            "session recorded"
        );

        // Snapshots already handed out keep their own copy.
        self.tx.send_modify(|entries| Arc::make_mut(entries).insert(0, session));
        true
    }

    /// Current contents, newest first.
    pub fn all(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.tx.borrow().len()
    }

    /// Most recently recorded session.
    pub fn head(&self) -> Option<Session> {
        self.tx.borrow().first().cloned()
    }

    /// Observe every republished snapshot.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for SessionLog {
    fn default() -> Self {
        Self::new()
    }
}
