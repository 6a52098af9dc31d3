//! Interactive terminal front end.
//!
//! The app owns the stopwatch engine and the wall clock, holds a handle to the
//! shared session log, and renders whichever tab is active. All state changes
//! happen on the task running [`App::run`]; tick sources only deliver
//! messages to it.

mod command;
mod screens;
mod tabs;

use std::future::Future;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::engine::{SessionLog, StopwatchEngine, Tick, WallClock};

pub use command::Command;
pub use tabs::{render_tab_bar, Tab};

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    config: Config,
    tab: Tab,
    engine: StopwatchEngine,
    ticks: mpsc::UnboundedReceiver<Tick>,
    clock: WallClock,
    log: SessionLog,
}

impl App {
    /// Build the app and start the wall clock. Must be called inside a tokio
    /// runtime.
    pub fn new(config: Config, log: SessionLog, tab: Tab) -> Self {
        let (engine, ticks) = StopwatchEngine::new(log.clone(), config.stopwatch_options());
        let clock = WallClock::spawn(config.clock_interval());

        Self {
            config,
            tab,
            engine,
            ticks,
            clock,
            log,
        }
    }

    /// Drive the app until `quit`, end of input, or `shutdown` resolves.
    ///
    /// Both tick sources are released before this returns. On an output
    /// error the app is dropped instead, which releases them as well.
    pub async fn run<R, W, S>(mut self, input: R, out: &mut W, shutdown: S) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
        S: Future,
    {
        let mut lines = input.lines();
        let mut clock_rx = self.clock.subscribe();
        let mut log_rx = self.log.subscribe();
        tokio::pin!(shutdown);

        self.render(out)?;

        let result = loop {
            tokio::select! {
                Some(tick) = self.ticks.recv() => {
                    self.engine.tick(tick);
                    if self.tab == Tab::Stopwatch {
                        writeln!(out, "{}", screens::stopwatch_screen(self.engine.state()))?;
                    }
                }
                Ok(()) = clock_rx.changed() => {
                    let now = *clock_rx.borrow_and_update();
                    if self.tab == Tab::Clock {
                        writeln!(out, "{}", screens::clock_screen(now, &Local, &self.config.clock_format))?;
                    }
                }
                Ok(()) = log_rx.changed() => {
                    log_rx.borrow_and_update();
                    if self.tab == Tab::Log {
                        self.render_screen(out)?;
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read input")? else {
                        debug!("input closed");
                        break Ok(());
                    };
                    match self.handle_line(&line, out) {
                        Ok(Flow::Continue) => {}
                        Ok(Flow::Quit) => break Ok(()),
                        Err(e) => break Err(e),
                    }
                }
                _ = &mut shutdown => {
                    info!("shutdown requested");
                    break Ok(());
                }
            }
        };

        self.teardown();
        result
    }

    /// Parse and execute one line of input. Blank lines are ignored and
    /// unparseable ones are reported without ending the session.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }

        match line.parse::<Command>() {
            Ok(command) => self.execute(command, out),
            Err(e) => {
                writeln!(out, "{e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, tab = %self.tab, "executing command");

        match command {
            Command::Start => {
                self.engine.start();
                writeln!(out, "{}", screens::stopwatch_screen(self.engine.state()))?;
            }
            Command::Stop => {
                if let Some(session) = self.engine.stop() {
                    writeln!(out, "{}", screens::acknowledgement(&session))?;
                }
                writeln!(out, "{}", screens::stopwatch_screen(self.engine.state()))?;
            }
            Command::Reset => {
                self.engine.reset();
                writeln!(out, "{}", screens::stopwatch_screen(self.engine.state()))?;
            }
            Command::Show(tab) => {
                self.tab = tab;
                self.render(out)?;
            }
            Command::Export => {
                let json = serde_json::to_string_pretty(&*self.log.all())
                    .context("Failed to serialize session log")?;
                writeln!(out, "{json}")?;
            }
            Command::Help => writeln!(out, "{}", screens::HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Tab bar followed by the active screen.
    fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", render_tab_bar(self.tab))?;
        self.render_screen(out)
    }

    fn render_screen<W: Write>(&self, out: &mut W) -> Result<()> {
        let screen = match self.tab {
            Tab::Clock => {
                screens::clock_screen(self.clock.now(), &Local, &self.config.clock_format)
            }
            Tab::Stopwatch => screens::stopwatch_screen(self.engine.state()),
            Tab::Settings => screens::settings_screen(&self.config),
            Tab::Log => {
                screens::log_screen(&self.log.all(), &Local, &self.config.timestamp_format)
            }
        };
        writeln!(out, "{screen}")?;
        out.flush().context("Failed to flush output")
    }

    fn teardown(&mut self) {
        if self.engine.is_running() {
            warn!(
                elapsed_seconds = self.engine.elapsed_seconds(),
                "exiting with the stopwatch running, discarding the current run"
            );
        }
        self.engine.reset();
        self.clock.shutdown();
    }
}
