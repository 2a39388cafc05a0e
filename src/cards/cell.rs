//! Board cells.
//!
//! A cell either holds a card or is empty because its pair was matched and
//! cleared. Callers match on the variant; there is no sentinel card to
//! compare against.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Rendering of a cleared cell.
pub const REMOVED: &str = "   ";

/// Contents of one board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// A card is still in play here.
    Occupied(Card),
    /// The pair was matched and this card is gone.
    Removed,
}

impl Cell {
    /// Has this cell been cleared?
    #[must_use]
    pub fn is_removed(&self) -> bool {
        matches!(self, Cell::Removed)
    }

    /// The card, unless the cell was cleared.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Cell::Occupied(card) => Some(card),
            Cell::Removed => None,
        }
    }

    pub(crate) fn card_mut(&mut self) -> Option<&mut Card> {
        match self {
            Cell::Occupied(card) => Some(card),
            Cell::Removed => None,
        }
    }

    /// Cleared cells count as permanently face up.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.card().map_or(true, Card::is_face_up)
    }

    /// The card's symbol. Cleared cells have none.
    #[must_use]
    pub fn symbol(&self) -> Option<char> {
        self.card().map(Card::symbol)
    }
}

impl From<Card> for Cell {
    fn from(card: Card) -> Self {
        Cell::Occupied(card)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Occupied(card) => write!(f, "{card}"),
            Cell::Removed => f.write_str(REMOVED),
        }
    }
}
