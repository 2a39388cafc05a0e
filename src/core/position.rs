//! Board coordinates.
//!
//! Cells are addressed by zero-based `(col, row)` and stored column-major:
//! the flat index of a cell is `col * rows + row`.
//!
//! ```
//! use memory_game::core::Position;
//!
//! let rows = 5;
//! let pos = Position::new(2, 3);
//! assert_eq!(pos.index(rows), 13);
//! assert_eq!(Position::from_index(13, rows), pos);
//! ```

use serde::{Deserialize, Serialize};

/// A cell location on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based column.
    pub col: usize,
    /// Zero-based row.
    pub row: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// Flat column-major index on a board with `rows` rows.
    #[must_use]
    pub const fn index(self, rows: usize) -> usize {
        self.col * rows + self.row
    }

    /// Inverse of [`Position::index`].
    ///
    /// `rows` must be non-zero.
    #[must_use]
    pub const fn from_index(index: usize, rows: usize) -> Self {
        Self {
            col: index / rows,
            row: index % rows,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
