//! Board configuration.
//!
//! `BoardConfig` describes a game before it is dealt: size, symbols, and an
//! optional seed. It can be built in code or read from TOML; missing keys
//! fall back to the defaults (a 4x5 board using the alphabet).
//!
//! ```
//! use memory_game::core::BoardConfig;
//!
//! let config = BoardConfig::from_toml("cols = 2\nrows = 2\nseed = 9").unwrap();
//! let game = config.build().unwrap();
//!
//! assert_eq!(game.pairs(), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::cards::DEFAULT_SYMBOLS;
use crate::error::ConfigError;
use crate::rules::Memory;

/// Settings for dealing a new board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Number of columns.
    pub cols: usize,

    /// Number of rows.
    pub rows: usize,

    /// Card symbols, one per character. `None` for the alphabet.
    pub symbols: Option<String>,

    /// RNG seed. `None` to seed from the operating system.
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 5,
            symbols: None,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, cols: usize, rows: usize) -> Self {
        self.cols = cols;
        self.rows = rows;
        self
    }

    /// Use custom symbols.
    #[must_use]
    pub fn with_symbols(mut self, symbols: impl Into<String>) -> Self {
        self.symbols = Some(symbols.into());
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The symbols to deal from.
    #[must_use]
    pub fn symbols(&self) -> Vec<char> {
        match &self.symbols {
            Some(symbols) => symbols.chars().collect(),
            None => DEFAULT_SYMBOLS.to_vec(),
        }
    }

    /// An RNG for this configuration: seeded if a seed is set, otherwise
    /// from entropy.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Deal a board using `rng`.
    pub fn build_with(&self, rng: &mut GameRng) -> Result<Memory, ConfigError> {
        Memory::new(self.cols, self.rows, &self.symbols(), rng)
    }

    /// Deal a board with [`BoardConfig::rng`].
    pub fn build(&self) -> Result<Memory, ConfigError> {
        self.build_with(&mut self.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!((config.cols, config.rows), (4, 5));
        assert_eq!(config.symbols(), DEFAULT_SYMBOLS.to_vec());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new().with_size(2, 3).with_symbols("xyz").with_seed(7);
        assert_eq!((config.cols, config.rows), (2, 3));
        assert_eq!(config.symbols(), vec!['x', 'y', 'z']);
        assert_eq!(config.rng().seed(), 7);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = BoardConfig::from_toml("rows = 2\nsymbols = \"QRST\"").unwrap();
        assert_eq!(config.cols, 4);
        assert_eq!(config.rows, 2);
        assert_eq!(config.symbols.as_deref(), Some("QRST"));
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(BoardConfig::from_toml("").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        assert!(matches!(
            BoardConfig::from_toml("cols = \"four\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_seeded_build_is_deterministic() {
        let config = BoardConfig::new().with_size(4, 4).with_seed(11);
        let a = config.build().unwrap();
        let b = config.build().unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_build_validates() {
        let odd = BoardConfig::new().with_size(3, 1).with_seed(1);
        assert!(matches!(odd.build(), Err(ConfigError::OddCellCount { .. })));

        let short = BoardConfig::new().with_size(4, 4).with_symbols("AB").with_seed(1);
        assert!(matches!(short.build(), Err(ConfigError::NotEnoughSymbols { .. })));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = BoardConfig::new().with_symbols("ABC").with_seed(3);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
