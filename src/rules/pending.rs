//! The pending-move state machine.
//!
//! ```text
//! Idle --flip--> One --flip--> Two --flip--> One
//!                               |
//!                               +-- resolves the held pair first
//! ```
//!
//! A pair is scored as soon as its second card is flipped, but it is only
//! cleared (or turned back over) when the *next* flip arrives.

use super::moves::Move;

/// Moves not yet resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PendingMoves {
    /// Nothing pending.
    #[default]
    Idle,
    /// The first card of a pair is showing.
    One(Move),
    /// Both cards of a pair are showing, awaiting resolution.
    Two(Move, Move),
}

/// What to do with a resolved pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The pair matched: clear both cells.
    Clear(Move, Move),
    /// No match: turn both cards back over.
    Hide(Move, Move),
}

impl Resolution {
    /// The two moves being resolved, oldest first.
    #[must_use]
    pub fn moves(&self) -> [&Move; 2] {
        match self {
            Resolution::Clear(first, second) | Resolution::Hide(first, second) => [first, second],
        }
    }
}

/// Result of feeding one flip into the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after this flip.
    pub next: PendingMoves,
    /// The flip completed a matching pair.
    pub scored: bool,
    /// The previously held pair, to be resolved before this flip settles.
    pub resolution: Option<Resolution>,
}

impl PendingMoves {
    /// Number of pending moves (0, 1 or 2).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            PendingMoves::Idle => 0,
            PendingMoves::One(_) => 1,
            PendingMoves::Two(..) => 2,
        }
    }

    /// True in the `Idle` state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, PendingMoves::Idle)
    }

    /// The older pending move.
    #[must_use]
    pub fn first(&self) -> Option<&Move> {
        match self {
            PendingMoves::Idle => None,
            PendingMoves::One(first) | PendingMoves::Two(first, _) => Some(first),
        }
    }

    /// The newer pending move, when two are held.
    #[must_use]
    pub fn second(&self) -> Option<&Move> {
        match self {
            PendingMoves::Two(_, second) => Some(second),
            _ => None,
        }
    }

    /// Record a new flip.
    #[must_use]
    pub fn advance(self, flipped: Move) -> Transition {
        match self {
            PendingMoves::Idle => Transition {
                next: PendingMoves::One(flipped),
                scored: false,
                resolution: None,
            },
            PendingMoves::One(first) => Transition {
                scored: first.matches(&flipped),
                next: PendingMoves::Two(first, flipped),
                resolution: None,
            },
            PendingMoves::Two(first, second) => {
                let resolution = if first.matches(&second) {
                    Resolution::Clear(first, second)
                } else {
                    Resolution::Hide(first, second)
                };
                Transition {
                    next: PendingMoves::One(flipped),
                    scored: false,
                    resolution: Some(resolution),
                }
            }
        }
    }
}
