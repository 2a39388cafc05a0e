//! The change-notification port.
//!
//! A front-end registers one observer with the engine. The engine calls it
//! synchronously, before `flip` returns, once per cell it touched.
//!
//! Any `FnMut(&Cell, Position)` closure is an observer:
//!
//! ```
//! use memory_game::core::GameRng;
//! use memory_game::rules::Memory;
//!
//! let mut rng = GameRng::new(7);
//! let mut game = Memory::with_default_symbols(2, 2, &mut rng).unwrap();
//!
//! game.set_on_change(|cell: &memory_game::cards::Cell, pos: memory_game::core::Position| {
//!     println!("{pos} is now {cell}");
//! });
//! game.flip(0, 0).unwrap();
//! ```

use tracing::debug;

use crate::cards::Cell;
use crate::core::Position;

/// Receives a callback whenever a board cell changes.
///
/// Called for flips face up, flips back face down, and removals. The cell
/// passed in is the cell's state after the change.
pub trait MemoryObserver {
    /// The cell at `position` changed.
    fn memory_changed(&mut self, cell: &Cell, position: Position);
}

impl<F> MemoryObserver for F
where
    F: FnMut(&Cell, Position),
{
    fn memory_changed(&mut self, cell: &Cell, position: Position) {
        self(cell, position);
    }
}

/// Observer that logs every change at `debug` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl MemoryObserver for TracingObserver {
    fn memory_changed(&mut self, cell: &Cell, position: Position) {
        debug!(col = position.col, row = position.row, cell = %cell, "cell changed");
    }
}
