//! The Memory engine.
//!
//! `Memory` owns the grid and runs the flip protocol:
//! - Validate the flip (range, game over, removed, face up, in that order)
//! - Turn the card face up and count the move
//! - Feed the move into `PendingMoves`, scoring or resolving as needed
//! - Notify the observer for every touched cell, the flipped cell last

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info};

use super::moves::Move;
use super::pending::{PendingMoves, Resolution};
use crate::board::Grid;
use crate::cards::{Card, Cell, DEFAULT_SYMBOLS};
use crate::core::{GameRng, Position};
use crate::error::{ConfigError, MoveError};
use crate::events::MemoryObserver;

/// A game of Memory.
///
/// ## Usage
///
/// ```
/// use memory_game::core::GameRng;
/// use memory_game::rules::Memory;
///
/// let mut rng = GameRng::new(42);
/// let mut game = Memory::new(2, 1, &['A'], &mut rng).unwrap();
///
/// game.flip(0, 0).unwrap();
/// game.flip(1, 0).unwrap();
///
/// assert_eq!(game.moves(), 2);
/// assert_eq!(game.score(), 1);
/// assert!(game.is_game_over());
/// ```
pub struct Memory {
    grid: Grid,
    pairs: usize,
    score: usize,
    moves: usize,
    pending: PendingMoves,
    observer: Option<Box<dyn MemoryObserver>>,
}

impl Memory {
    /// Deal a `cols` x `rows` board from the first `pairs` of `symbols`.
    ///
    /// Fails if the board has an odd number of cells, if there are fewer
    /// than `cols * rows / 2` symbols, or if one of the symbols used is blank
    /// or repeated.
    pub fn new(
        cols: usize,
        rows: usize,
        symbols: &[char],
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let pairs = pairs_for(cols, rows)?;
        check_deck_size(cols, rows, pairs, symbols.len())?;

        let faces = symbols[..pairs]
            .iter()
            .map(|&symbol| Card::new(symbol))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_faces(cols, rows, &faces, rng)
    }

    /// Deal a board using [`DEFAULT_SYMBOLS`].
    pub fn with_default_symbols(
        cols: usize,
        rows: usize,
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        Self::new(cols, rows, &DEFAULT_SYMBOLS, rng)
    }

    /// Deal a board from template cards, two face-down copies of each of
    /// the first `pairs` faces.
    ///
    /// Image paths on the templates are carried onto the dealt cards.
    pub fn from_faces(
        cols: usize,
        rows: usize,
        faces: &[Card],
        rng: &mut GameRng,
    ) -> Result<Self, ConfigError> {
        let pairs = pairs_for(cols, rows)?;
        check_deck_size(cols, rows, pairs, faces.len())?;
        let faces = &faces[..pairs];

        let mut seen = FxHashSet::default();
        for face in faces {
            if !seen.insert(face.symbol()) {
                return Err(ConfigError::DuplicateSymbol {
                    symbol: face.symbol(),
                });
            }
        }

        let mut cells: Vec<Cell> = faces
            .iter()
            .chain(faces)
            .map(|face| Cell::from(face.deal()))
            .collect();
        rng.shuffle(&mut cells);

        debug!(cols, rows, pairs, seed = rng.seed(), "dealt board");

        Ok(Self {
            grid: Grid::new(cols, rows, cells),
            pairs,
            score: 0,
            moves: 0,
            pending: PendingMoves::Idle,
            observer: None,
        })
    }

    // === Queries ===

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of distinct symbols on the board.
    #[must_use]
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    /// Number of single-card flips made so far.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Number of pairs matched so far.
    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    /// True once every pair has been matched.
    ///
    /// Based on score alone: the final pair is still face up on the board
    /// when this turns true, because clearing waits for another flip.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.score == self.pairs
    }

    /// Pairs still physically on the board, matched or not.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.grid.occupied() / 2
    }

    /// The cell at `(col, row)`.
    pub fn card_at(&self, col: usize, row: usize) -> Result<&Cell, MoveError> {
        self.grid.get(col, row)
    }

    /// The whole grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Iterate all cells with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.grid.iter()
    }

    /// Moves waiting to be resolved.
    #[must_use]
    pub fn pending(&self) -> &PendingMoves {
        &self.pending
    }

    // === Observer ===

    /// Register the change observer, replacing any previous one.
    pub fn set_on_change(&mut self, observer: impl MemoryObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Unregister the change observer, returning it.
    pub fn clear_on_change(&mut self) -> Option<Box<dyn MemoryObserver>> {
        self.observer.take()
    }

    // === Play ===

    /// Flip the card at `(col, row)` face up.
    ///
    /// On error nothing changes and no notification is sent.
    pub fn flip(&mut self, col: usize, row: usize) -> Result<(), MoveError> {
        let pos = self.grid.position(col, row)?;
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let card = match self.grid.cell_mut(pos) {
            Cell::Removed => return Err(MoveError::Removed { col, row }),
            Cell::Occupied(card) if card.is_face_up() => {
                return Err(MoveError::AlreadyFaceUp { col, row })
            }
            Cell::Occupied(card) => card,
        };

        card.flip();
        self.moves += 1;
        let flipped = Move::new(pos, card, self.moves);
        debug!(%flipped, moves = self.moves, "flipped card");

        let mut changed: SmallVec<[Position; 3]> = SmallVec::new();
        let transition = std::mem::take(&mut self.pending).advance(flipped);

        if transition.scored {
            self.score += 1;
            debug!(score = self.score, pairs = self.pairs, "pair matched");
            if self.is_game_over() {
                info!(moves = self.moves, pairs = self.pairs, "all pairs matched");
            }
        }

        if let Some(resolution) = transition.resolution {
            self.resolve(&resolution);
            changed.extend(resolution.moves().map(Move::position));
        }

        self.pending = transition.next;
        changed.push(pos);
        self.notify(&changed);

        Ok(())
    }

    fn resolve(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Clear(first, second) => {
                debug!(%first, %second, "clearing matched pair");
                self.grid.remove(first.position());
                self.grid.remove(second.position());
            }
            Resolution::Hide(first, second) => {
                debug!(%first, %second, "hiding unmatched pair");
                first.place_face_down(&mut self.grid);
                second.place_face_down(&mut self.grid);
            }
        }
    }

    fn notify(&mut self, changed: &[Position]) {
        let Some(observer) = self.observer.as_mut() else {
            return;
        };
        for &pos in changed {
            observer.memory_changed(self.grid.cell(pos), pos);
        }
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("grid", &self.grid)
            .field("pairs", &self.pairs)
            .field("score", &self.score)
            .field("moves", &self.moves)
            .field("pending", &self.pending)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl std::fmt::Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid)
    }
}

/// Pairs on a `cols` x `rows` board; the cell count must be even.
fn pairs_for(cols: usize, rows: usize) -> Result<usize, ConfigError> {
    let cells = cols
        .checked_mul(rows)
        .ok_or(ConfigError::BoardTooLarge { cols, rows })?;
    if cells % 2 != 0 {
        return Err(ConfigError::OddCellCount { cols, rows });
    }
    Ok(cells / 2)
}

fn check_deck_size(
    cols: usize,
    rows: usize,
    pairs: usize,
    provided: usize,
) -> Result<(), ConfigError> {
    if provided < pairs {
        return Err(ConfigError::NotEnoughSymbols {
            cols,
            rows,
            needed: pairs,
            provided,
        });
    }
    Ok(())
}
