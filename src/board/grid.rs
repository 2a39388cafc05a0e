//! The card grid.
//!
//! `Grid` owns every cell on the board and handles lookup by position:
//! - Range-checked access by `(col, row)`, column first
//! - Column-major storage (`col * rows + row`)
//! - Row-major text rendering, one line per row
//!
//! ## Usage
//!
//! Grids are only built by the engine, which validates the board size first.
//!
//! ```
//! use memory_game::core::GameRng;
//! use memory_game::rules::Memory;
//!
//! let game = Memory::new(2, 1, &['A'], &mut GameRng::new(7)).unwrap();
//! let grid = game.grid();
//!
//! assert!(grid.get(1, 0).is_ok());
//! assert!(grid.get(2, 0).is_err());
//! assert_eq!(grid.to_string(), "[ ][ ]\n");
//! ```
//!
//! ```compile_fail
//! use memory_game::board::Grid;
//!
//! let grid = Grid::new(2, 1, Vec::new());
//! ```

use rustc_hash::FxHashMap;

use crate::cards::Cell;
use crate::core::Position;
use crate::error::MoveError;

/// A `cols` x `rows` board of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    /// Column-major cells.
    cells: Vec<Cell>,
}

impl Grid {
    /// Wrap column-major `cells` as a grid. Callers have already checked
    /// that `cols * rows` fits and matches `cells.len()`.
    #[must_use]
    pub(crate) fn new(cols: usize, rows: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(Some(cells.len()), cols.checked_mul(rows));
        Self { cols, rows, cells }
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Validate a coordinate pair. Columns are checked before rows.
    pub fn position(&self, col: usize, row: usize) -> Result<Position, MoveError> {
        if col >= self.cols {
            Err(MoveError::InvalidColumn { col })
        } else if row >= self.rows {
            Err(MoveError::InvalidRow { row })
        } else {
            Ok(Position::new(col, row))
        }
    }

    /// The cell at `(col, row)`.
    pub fn get(&self, col: usize, row: usize) -> Result<&Cell, MoveError> {
        let pos = self.position(col, row)?;
        Ok(&self.cells[pos.index(self.rows)])
    }

    /// The cell at an already validated position.
    pub(crate) fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.index(self.rows)]
    }

    /// Mutable access to an already validated position.
    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.index(self.rows)]
    }

    /// Clear the cell at an already validated position.
    pub(crate) fn remove(&mut self, pos: Position) {
        *self.cell_mut(pos) = Cell::Removed;
    }

    /// Iterate cells with their positions, in storage (column-major) order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Position::from_index(index, rows), cell))
    }

    /// How many cards of each symbol are still on the board.
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for symbol in self.cells.iter().filter_map(Cell::symbol) {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Number of cells still holding a card.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_removed()).count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cells[Position::new(col, row).index(self.rows)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
