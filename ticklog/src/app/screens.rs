//! Text rendering for each tab.
//!
//! Everything here is a pure function of values produced by the engine.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

use crate::config::Config;
use crate::engine::format_duration;
use crate::models::{Session, StopwatchState};

pub const EMPTY_LOG_MESSAGE: &str =
    "No sessions yet. Start the stopwatch and stop it to log one.";

pub fn clock_screen<Tz>(now: DateTime<Utc>, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("◷ {}", now.with_timezone(tz).format(pattern))
}

pub fn stopwatch_screen(state: StopwatchState) -> String {
    format!(
        "⏱ {}  ({})",
        format_duration(state.elapsed_seconds),
        state.status()
    )
}

/// One line per session, newest first, or the empty-state message.
pub fn log_screen<Tz>(entries: &[Session], tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if entries.is_empty() {
        return EMPTY_LOG_MESSAGE.to_string();
    }

    entries
        .iter()
        .enumerate()
        .map(|(i, session)| {
            format!(
                "{:>3}. {}  {}  {}",
                i + 1,
                session.description,
                format_duration(session.duration_seconds),
                session.timestamp.with_timezone(tz).format(pattern)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn settings_screen(config: &Config) -> String {
    format!(
        "Settings\n\
         \x20 Clock interval:  {} ms\n\
         \x20 Session label:   {}\n\
         \x20 Start tab:       {}\n\
         \n\
         About\n\
         \x20 ticklog {}\n\
         \x20 A clock, a stopwatch, and a log of timed sessions.\n\
         \x20 Sessions are kept in memory until the program exits.",
        config.clock_interval_ms,
        config.session_label,
        config.start_tab,
        env!("CARGO_PKG_VERSION"),
    )
}

/// Acknowledgement shown after a stop that logged a session.
pub fn acknowledgement(session: &Session) -> String {
    format!("Duration: {}", format_duration(session.duration_seconds))
}

pub const HELP: &str = "\
Commands:
  start              start the stopwatch
  stop | pause       stop the stopwatch and log the session
  reset              zero the stopwatch without logging
  tab <name> | <name>
                     switch tab (clock, stopwatch, settings, log)
  export             print the session log as JSON
  help               show this message
  quit | exit        leave";
