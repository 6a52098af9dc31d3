use anyhow::Result;
use clap::Parser;

use ticklog::cli::{execute, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    execute(cli).await
}
