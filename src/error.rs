//! Error types for the Memory engine.
//!
//! Construction problems are [`ConfigError`]s and are fatal to the
//! construction attempt. Problems during play are [`MoveError`]s; they leave
//! the engine untouched and the caller may simply try another move.
//!
//! The console front-end adds [`CommandError`] for unparseable input and
//! [`SessionError`] for failures that end a session.

use thiserror::Error;

/// Errors raised while building cards, configs, or a board.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Can't play memory with an odd number of cards ({cols}x{rows}).")]
    OddCellCount { cols: usize, rows: usize },

    #[error("{needed} symbols needed for a {cols}x{rows} board, but only {provided} provided.")]
    NotEnoughSymbols {
        cols: usize,
        rows: usize,
        needed: usize,
        provided: usize,
    },

    #[error("Symbol '{symbol}' appears more than once in the deck.")]
    DuplicateSymbol { symbol: char },

    #[error("Blank cards are not allowed.")]
    BlankSymbol,

    #[error("A {cols}x{rows} board is too large.")]
    BoardTooLarge { cols: usize, rows: usize },

    #[error("invalid board config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors raised by a single flip.
///
/// Checked in a fixed order: range, game over, removed, face up.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Invalid column: {col}")]
    InvalidColumn { col: usize },

    #[error("Invalid row: {row}")]
    InvalidRow { row: usize },

    #[error("You won! Type \"restart\" to play again.")]
    GameOver,

    #[error("Can't play a card that has been removed.")]
    Removed { col: usize, row: usize },

    #[error("Can't flip a card that is already face up!")]
    AlreadyFaceUp { col: usize, row: usize },
}

/// Errors parsing a console command line.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Please enter a command.")]
    Empty,

    #[error("Invalid command: {0}")]
    Unknown(String),

    #[error("Invalid move! Please try again.")]
    MoveArity,

    #[error("Column and row must be non-negative integers.")]
    NotAnInteger,
}

/// Errors that end a console session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("console I/O failed")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl MoveError {
    /// True for the column/row range errors.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, MoveError::InvalidColumn { .. } | MoveError::InvalidRow { .. })
    }
}
