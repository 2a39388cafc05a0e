//! Command-line interface for the `memory` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use memory_game::BoardConfig;

/// Memory - flip cards two at a time and find every pair
#[derive(Parser, Debug)]
#[command(name = "memory")]
#[command(about = "Play the Memory matching-pairs game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of columns
    #[arg(requires = "rows")]
    pub cols: Option<usize>,

    /// Number of rows
    pub rows: Option<usize>,

    /// TOML file with board settings (cols, rows, symbols, seed)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Card symbols, one per character
    #[arg(long)]
    pub symbols: Option<String>,

    /// Seed for dealing the board
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log engine activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Defaults, then the config file, then command-line flags.
    pub fn board_config(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                BoardConfig::from_toml(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => BoardConfig::default(),
        };

        if let (Some(cols), Some(rows)) = (self.cols, self.rows) {
            config = config.with_size(cols, rows);
        }
        if let Some(symbols) = &self.symbols {
            config = config.with_symbols(symbols.clone());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        Ok(config)
    }
}
