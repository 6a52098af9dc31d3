//! CLI command execution.

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tracing::debug;

use crate::app::{App, Tab};
use crate::config::Config;
use crate::engine::{format_duration, SessionLog};
use crate::logging::init_logging;

use super::args::{Cli, Commands};

/// Execute the parsed CLI.
pub async fn execute(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    debug!(?config, "effective configuration");

    match cli.command {
        None => run(config, None).await,
        Some(Commands::Run { tab }) => run(config, tab).await,
        Some(Commands::Format { seconds }) => {
            println!("{}", format_duration(seconds));
            Ok(())
        }
        Some(Commands::Config) => {
            let text = toml::to_string_pretty(&config).context("Failed to serialize config")?;
            print!("{text}");
            Ok(())
        }
    }
}

/// Run the interactive app on stdin/stdout until quit, EOF, or Ctrl-C.
async fn run(config: Config, tab: Option<Tab>) -> Result<()> {
    let tab = tab.unwrap_or(config.start_tab);

    // One log for the whole process; the app and anything else that needs it
    // get a handle.
    let log = SessionLog::new();
    let app = App::new(config, log.clone(), tab);

    let input = BufReader::new(tokio::io::stdin());
    let mut out = std::io::stdout();
    app.run(input, &mut out, tokio::signal::ctrl_c()).await?;

    debug!(sessions = log.len(), "exiting, discarding session log");
    Ok(())
}
