//! Board storage.
//!
//! `Grid` holds the cells of a game. It knows coordinates and rendering but
//! nothing about turns or scoring; that lives in `rules`.

pub mod grid;

pub use grid::Grid;
