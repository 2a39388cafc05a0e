//! Change notifications for front-ends.
//!
//! The engine reports every cell mutation through a single registered
//! `MemoryObserver`. Registering a new observer replaces the old one.
//!
//! - `MemoryObserver`: the callback port (closures implement it)
//! - `ChangeEvent` / `ChangeKind`: value form of one notification
//! - `ChangeLog`: recording observer
//! - `TracingObserver`: logs changes through `tracing`

pub mod event;
pub mod observer;

pub use event::{ChangeEvent, ChangeKind, ChangeLog};
pub use observer::{MemoryObserver, TracingObserver};
