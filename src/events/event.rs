//! Recorded cell changes.
//!
//! `ChangeEvent` is the value form of one observer callback. `ChangeLog` is
//! an observer that records them, so a front-end (or a test) can hand one
//! clone to the engine and read the other afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::observer::MemoryObserver;
use crate::cards::Cell;
use crate::core::Position;

/// What happened to a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeKind {
    /// A card is now showing its face.
    FaceUp,
    /// A card was turned back over.
    FaceDown,
    /// The card was matched and cleared.
    Removed,
}

/// One notification: the cell at `position` now looks like `cell`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Where the change happened.
    pub position: Position,
    /// The cell after the change.
    pub cell: Cell,
}

impl ChangeEvent {
    /// Create an event.
    #[must_use]
    pub fn new(position: Position, cell: Cell) -> Self {
        Self { position, cell }
    }

    /// Classify the change by the resulting cell.
    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        match &self.cell {
            Cell::Removed => ChangeKind::Removed,
            Cell::Occupied(card) if card.is_face_up() => ChangeKind::FaceUp,
            Cell::Occupied(_) => ChangeKind::FaceDown,
        }
    }
}

/// A shared, recording observer.
///
/// Clones share the same buffer.
#[derive(Clone, Debug, Default)]
pub struct ChangeLog {
    events: Rc<RefCell<Vec<ChangeEvent>>>,
}

impl ChangeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// A copy of everything recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<ChangeEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<ChangeEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl MemoryObserver for ChangeLog {
    fn memory_changed(&mut self, cell: &Cell, position: Position) {
        self.events
            .borrow_mut()
            .push(ChangeEvent::new(position, cell.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_kind() {
        let mut card = Card::new('A').unwrap();
        let down = ChangeEvent::new(Position::new(0, 0), Cell::from(card.clone()));
        card.flip();
        let up = ChangeEvent::new(Position::new(0, 0), Cell::from(card));
        let removed = ChangeEvent::new(Position::new(0, 0), Cell::Removed);

        assert_eq!(down.kind(), ChangeKind::FaceDown);
        assert_eq!(up.kind(), ChangeKind::FaceUp);
        assert_eq!(removed.kind(), ChangeKind::Removed);
    }

    #[test]
    fn test_clones_share_buffer() {
        let log = ChangeLog::new();
        let mut observer = log.clone();

        observer.memory_changed(&Cell::Removed, Position::new(1, 0));
        observer.memory_changed(&Cell::Removed, Position::new(0, 1));

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[1].position, Position::new(0, 1));
    }

    #[test]
    fn test_take_drains() {
        let log = ChangeLog::new();
        let mut observer = log.clone();
        observer.memory_changed(&Cell::Removed, Position::new(0, 0));

        assert_eq!(log.take().len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_event_serialization() {
        let event = ChangeEvent::new(Position::new(3, 1), Cell::from(Card::new('K').unwrap()));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ChangeEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
        assert_eq!(deserialized.cell.symbol(), Some('K'));
    }
}
