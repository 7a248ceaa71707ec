//! Pairwise conflict detection.

use super::Square;
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Whether two distinct queens threaten each other.
///
/// Queens attack along their row, their column and both diagonals
/// (`|Δrow| == |Δcol|`).
pub fn attacks(a: Square, b: Square) -> bool {
    let same_row = a.row() == b.row();
    let same_col = a.col() == b.col();
    let same_diagonal = a.row().abs_diff(b.row()) == a.col().abs_diff(b.col());
    same_row || same_col || same_diagonal
}

/// Returns every queen that takes part in at least one attacking pair.
///
/// Both members of a pair are flagged. Duplicate entries in `queens` are
/// compared like any other pair and so flag each other.
#[instrument(skip(queens), fields(count = queens.len()))]
pub fn find_conflicts(queens: &[Square]) -> BTreeSet<Square> {
    let mut conflicts = BTreeSet::new();
    for (i, &a) in queens.iter().enumerate() {
        for &b in &queens[i + 1..] {
            if attacks(a, b) {
                conflicts.insert(a);
                conflicts.insert(b);
            }
        }
    }
    debug!(conflicting = conflicts.len(), "Computed conflict set");
    conflicts
}
