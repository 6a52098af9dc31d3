//! Wall-clock sampler for the clock tab.

use std::ops::ControlFlow;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::ticker::Ticker;

/// Republishes the current time once per period.
///
/// Display only. Dropping the clock or calling [`WallClock::shutdown`]
/// releases the underlying tick source.
#[derive(Debug)]
pub struct WallClock {
    rx: watch::Receiver<DateTime<Utc>>,
    ticker: Option<Ticker>,
}

impl WallClock {
    /// Start sampling. Must be called inside a tokio runtime.
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = watch::channel(Utc::now());

        let ticker = Ticker::spawn("wall-clock", period, move || {
            if tx.send(Utc::now()).is_err() {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        Self {
            rx,
            ticker: Some(ticker),
        }
    }

    /// Most recently sampled time.
    pub fn now(&self) -> DateTime<Utc> {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<DateTime<Utc>> {
        self.rx.clone()
    }

    /// Stop sampling. The last sampled time stays readable.
    pub fn shutdown(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
