//! Line-oriented console front-end.
//!
//! Commands: `move C R`, `restart`, `help`, `quit`. All parsing happens
//! here; the engine only ever sees column and row numbers.

pub mod command;
pub mod session;

pub use command::{Command, HELP};
pub use session::{Outcome, Session};
