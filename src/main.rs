//! Magic Squares - console game

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use magic_squares::{Console, GameConfig, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let console = Console::stdio().with_placeholder(*config.placeholder());

    let mut orchestrator = Orchestrator::start(console, config.names(), *config.show_banner())
        .context("Failed to set up players")?;
    let status = orchestrator.run().context("Game aborted")?;

    info!(%status, "Exiting");
    Ok(())
}

/// Logs go to stderr so they never mix with the game on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(config_path = ?cli.config))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load(cli.config.as_deref())?
        .with_names(cli.player_one.clone(), cli.player_two.clone())
        .with_placeholder(cli.placeholder)?;

    if cli.no_banner {
        config = config.without_banner();
    }

    Ok(config)
}
