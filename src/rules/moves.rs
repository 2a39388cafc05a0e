//! Moves: one successful flip.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::cards::Card;
use crate::core::Position;

/// Record of a single card turned face up.
///
/// `sequence` is the move number at the time of the flip. It identifies the
/// move, so a move (or a clone of it) never matches itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    symbol: char,
    sequence: usize,
}

impl Move {
    /// Record that `card` at `position` was flipped as move number `sequence`.
    #[must_use]
    pub fn new(position: Position, card: &Card, sequence: usize) -> Self {
        Self {
            position,
            symbol: card.symbol(),
            sequence,
        }
    }

    /// Column of the flipped card.
    #[must_use]
    pub fn col(&self) -> usize {
        self.position.col
    }

    /// Row of the flipped card.
    #[must_use]
    pub fn row(&self) -> usize {
        self.position.row
    }

    /// Where the flipped card sits.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Symbol of the flipped card.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Move number of this flip.
    #[must_use]
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Two different moves whose cards share a symbol.
    #[must_use]
    pub fn matches(&self, other: &Move) -> bool {
        self.sequence != other.sequence && self.symbol == other.symbol
    }

    /// Turn this move's card back over if it is still face up.
    ///
    /// No-op for a cleared cell.
    pub fn place_face_down(&self, grid: &mut Grid) {
        if let Some(card) = grid.cell_mut(self.position).card_mut() {
            card.place_face_down();
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move{{{}, col={}, row={}}}", self.symbol, self.col(), self.row())
    }
}
