//! Cards and board cells.
//!
//! ## Key Types
//!
//! - `Card`: A symbol plus face-up state, optionally carrying an image path
//! - `Cell`: What a board cell holds: an `Occupied` card or `Removed`
//!
//! Every symbol is dealt exactly twice. `BLANK_SYMBOL` is reserved and can
//! never appear on a card.

pub mod card;
pub mod cell;

pub use card::{Card, BLANK_SYMBOL, DEFAULT_SYMBOLS, FACE_DOWN};
pub use cell::{Cell, REMOVED};
