//! ticklog - a terminal clock, stopwatch, and in-memory log of timed sessions.
//!
//! Architecture:
//! - `engine` holds everything with a lifecycle: the stopwatch state machine,
//!   the shared session log, the wall-clock sampler, and the scoped tick
//!   sources driving them
//! - `app` is the interactive front end rendering the engine's values per tab
//! - `cli` parses arguments and wires config, logging, and the app together
//! - Sessions live only for the run of the process

pub mod app;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
