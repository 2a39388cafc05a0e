//! Core types: board positions, deterministic RNG, board configuration.
//!
//! These are the building blocks the rest of the crate shares. Nothing
//! here knows about turns or scoring.

pub mod config;
pub mod position;
pub mod rng;

pub use config::BoardConfig;
pub use position::Position;
pub use rng::GameRng;
