//! Memory - console front-end.

mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use memory_game::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.board_config()?;
    let rng = config.rng();
    info!(cols = config.cols, rows = config.rows, seed = rng.seed(), "starting game");

    let mut session = Session::new(
        config,
        rng,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    )?;
    let outcome = session.run()?;
    info!(?outcome, moves = session.game().moves(), "game finished");

    Ok(())
}

/// Logs go to stderr so the board on stdout stays readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
