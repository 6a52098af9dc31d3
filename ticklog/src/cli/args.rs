//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::Tab;

/// ticklog - a clock, a stopwatch, and a log of timed sessions
#[derive(Parser, Debug)]
#[command(name = "ticklog")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (default: <config dir>/ticklog/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive app
    Run {
        /// Tab to open on (overrides `start_tab` from the config)
        #[arg(short, long, value_enum)]
        tab: Option<Tab>,
    },

    /// Print a number of seconds as HH:MM:SS
    Format {
        /// Whole seconds to format
        seconds: u64,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["ticklog"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_run_with_tab_and_verbosity() {
        let cli = Cli::try_parse_from(["ticklog", "run", "--tab", "log", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Run { tab: Some(Tab::Log) })));
    }

    #[test]
    fn parses_format_seconds() {
        let cli = Cli::try_parse_from(["ticklog", "format", "3661"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Format { seconds: 3661 })));
    }

    #[test]
    fn rejects_unknown_tab() {
        assert!(Cli::try_parse_from(["ticklog", "run", "--tab", "weather"]).is_err());
    }
}
