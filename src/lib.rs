//! # memory-game
//!
//! The classic Memory matching-pairs card game.
//!
//! A rectangular board of face-down cards holds every symbol exactly twice.
//! The player flips two cards per turn looking for a match.
//!
//! ## Design Principles
//!
//! 1. **One Model, Many Front-Ends**: The engine knows nothing about
//!    rendering or input. Front-ends call `flip` and the query methods, and
//!    receive change notifications through a single observer.
//!
//! 2. **Explicit State Machine**: Pending moves are an enum
//!    (`Idle`, `One`, `Two`), not a pair of nullable fields.
//!
//! 3. **Deterministic Dealing**: Boards are shuffled with a caller-supplied,
//!    seedable `GameRng`. Same seed, same layout.
//!
//! ## Modules
//!
//! - `core`: Positions, RNG, board configuration
//! - `cards`: Cards and board cells
//! - `board`: The column-major grid
//! - `rules`: Moves, pending-move state machine, the `Memory` engine
//! - `events`: Observer port and change records
//! - `console`: Line-oriented text front-end
//! - `error`: Error types

pub mod board;
pub mod cards;
pub mod console;
pub mod core;
pub mod error;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{BoardConfig, GameRng, Position};

pub use crate::cards::{Card, Cell, BLANK_SYMBOL, DEFAULT_SYMBOLS};

pub use crate::board::Grid;

pub use crate::rules::{Memory, Move, PendingMoves, Resolution};

pub use crate::events::{ChangeEvent, ChangeKind, ChangeLog, MemoryObserver, TracingObserver};

pub use crate::console::{Command, Outcome, Session};

pub use crate::error::{CommandError, ConfigError, MoveError, SessionError};
