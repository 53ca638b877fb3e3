//! Strictly Match - console entry point

use anyhow::{Context, Result};
use clap::Parser;
use strictly_match_cli::{Cli, Console, Session, ShellConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let clear_screen = *config.clear_screen();

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut session = Session::new(Console::new(stdin, stdout, clear_screen), config);

    let outcome = session.run().context("match aborted")?;
    info!(?outcome, "Exiting");
    Ok(())
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<ShellConfig> {
    let mut config = ShellConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    if let Some(seed) = cli.seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(Some(seed));
    }
    if cli.no_clear {
        config = config.with_clear_screen(false);
    }
    Ok(config)
}

/// Logs go to stderr so they never interleave with prompts.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
