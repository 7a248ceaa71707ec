//! Player-side board state.

use super::{QueensError, Square, find_conflicts};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, warn};

/// Number of queens a complete answer contains.
pub const QUEEN_COUNT: usize = 8;

/// Result of toggling a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// A queen was placed on the square.
    Placed(Square),
    /// The queen on the square was removed.
    Removed(Square),
}

/// Queens placed by the player plus the current conflict highlighting.
///
/// Invariants:
/// - at most one queen per square
/// - at most [`QUEEN_COUNT`] queens
/// - every conflicting square holds a queen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueensBoard {
    queens: Vec<Square>,
    conflicts: BTreeSet<Square>,
}

impl QueensBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queens in placement order.
    pub fn queens(&self) -> &[Square] {
        &self.queens
    }

    /// Squares currently highlighted as conflicting.
    pub fn conflicts(&self) -> &BTreeSet<Square> {
        &self.conflicts
    }

    /// Whether a queen stands on `square`.
    pub fn has_queen(&self, square: Square) -> bool {
        self.queens.contains(&square)
    }

    /// Whether `square` holds a queen that is highlighted as conflicting.
    pub fn is_conflicted(&self, square: Square) -> bool {
        self.conflicts.contains(&square)
    }

    /// Places or removes a queen.
    ///
    /// Any interaction clears stale conflict highlighting, even when the
    /// toggle itself is rejected.
    #[instrument(skip(self), fields(placed = self.queens.len()))]
    pub fn toggle(&mut self, square: Square) -> Result<Toggle, QueensError> {
        self.conflicts.clear();

        let outcome = if let Some(idx) = self.queens.iter().position(|q| *q == square) {
            self.queens.remove(idx);
            Toggle::Removed(square)
        } else if self.queens.len() < QUEEN_COUNT {
            self.queens.push(square);
            Toggle::Placed(square)
        } else {
            warn!(%square, "Board already holds eight queens");
            return Err(QueensError::TooManyQueens);
        };

        debug_assert!(self.holds_invariants(), "Queen placement invariants violated");
        debug!(?outcome, "Toggled square");
        Ok(outcome)
    }

    /// Removes every queen and all highlighting.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.queens.clear();
        self.conflicts.clear();
    }

    /// Recomputes the conflict set from the current placements.
    #[instrument(skip(self))]
    pub fn validate(&mut self) -> &BTreeSet<Square> {
        self.conflicts = find_conflicts(&self.queens);
        &self.conflicts
    }

    /// Prepares the answer sent to the scoring service: one column per
    /// row, ordered by row.
    ///
    /// Fails without touching highlighting when the board does not hold
    /// exactly eight queens. Otherwise conflicts are highlighted but the
    /// answer is still produced, since the service decides validity.
    #[instrument(skip(self))]
    pub fn submission(&mut self) -> Result<Vec<u8>, QueensError> {
        if self.queens.len() != QUEEN_COUNT {
            return Err(QueensError::WrongCount {
                placed: self.queens.len(),
            });
        }

        let conflicts = self.validate().len();
        if conflicts > 0 {
            info!(conflicts, "Submitting a placement with local conflicts");
        }

        let mut sorted = self.queens.clone();
        sorted.sort_by_key(|q| q.row());
        Ok(sorted.iter().map(|q| q.col()).collect())
    }

    /// Aligns highlighting with the service's verdict.
    ///
    /// A valid verdict clears highlighting. An invalid verdict with nothing
    /// highlighted locally re-runs the validator on the same placements.
    #[instrument(skip(self))]
    pub fn reconcile(&mut self, valid: bool) {
        if valid {
            self.conflicts.clear();
        } else if self.conflicts.is_empty() {
            self.validate();
        }
    }

    fn holds_invariants(&self) -> bool {
        let unique: BTreeSet<_> = self.queens.iter().collect();
        unique.len() == self.queens.len()
            && self.queens.len() <= QUEEN_COUNT
            && self.conflicts.iter().all(|c| self.queens.contains(c))
    }
}
