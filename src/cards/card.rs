//! Playing cards.
//!
//! A `Card` has an immutable symbol and a mutable face-up flag. Two cards
//! are equal when their symbols are equal; orientation and display path do
//! not participate.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The reserved blank symbol. No real card may carry it.
pub const BLANK_SYMBOL: char = '\0';

/// Symbols used when a game is not given any: one per letter.
pub const DEFAULT_SYMBOLS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Rendering of any face-down card.
pub const FACE_DOWN: &str = "[ ]";

/// A single card on the board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    symbol: char,
    face_up: bool,
    /// Image shown by graphical front-ends. `None` for plain text cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
}

impl Card {
    /// Create a face-down card.
    ///
    /// Fails with [`ConfigError::BlankSymbol`] for [`BLANK_SYMBOL`].
    pub fn new(symbol: char) -> Result<Self, ConfigError> {
        if symbol == BLANK_SYMBOL {
            return Err(ConfigError::BlankSymbol);
        }
        Ok(Self {
            symbol,
            face_up: false,
            image: None,
        })
    }

    /// Create a face-down card with an image path for graphical front-ends.
    ///
    /// Validates the symbol exactly like [`Card::new`].
    pub fn with_image(symbol: char, image: impl Into<String>) -> Result<Self, ConfigError> {
        let mut card = Self::new(symbol)?;
        card.image = Some(image.into());
        Ok(card)
    }

    /// The symbol on the face of this card.
    #[must_use]
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Is the card face up?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Image path, if one was attached.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Turn the card over.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Turn the card face down if it is face up.
    pub fn place_face_down(&mut self) {
        self.face_up = false;
    }

    /// A fresh face-down copy, as dealt onto a new board.
    #[must_use]
    pub(crate) fn deal(&self) -> Self {
        Self {
            symbol: self.symbol,
            face_up: false,
            image: self.image.clone(),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.symbol.hash(hasher);
    }
}

impl std::fmt::Display for Card {
    /// `[A]` when face up, `[ ]` otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.face_up {
            write!(f, "[{}]", self.symbol)
        } else {
            f.write_str(FACE_DOWN)
        }
    }
}
