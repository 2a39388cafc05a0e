//! Game rules: moves, the pending-move state machine, and the engine.
//!
//! A turn is two flips. The second flip of a turn scores a match; the flip
//! after that resolves the pair, clearing matched cards or turning
//! unmatched cards back over.
//!
//! - `Move`: one successful flip
//! - `PendingMoves`: `Idle`, `One`, or `Two` moves awaiting resolution
//! - `Memory`: the engine front-ends drive

pub mod engine;
pub mod moves;
pub mod pending;

pub use engine::Memory;
pub use moves::Move;
pub use pending::{PendingMoves, Resolution, Transition};
