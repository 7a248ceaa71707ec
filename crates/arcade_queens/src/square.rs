//! Board coordinates.

use super::QueensError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 8;

/// A cell on the board, 0-indexed from the top-left.
///
/// Ordering is row-major, which is also the order the service expects
/// columns to be listed in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a square, rejecting coordinates off the board.
    #[instrument]
    pub fn new(row: u8, col: u8) -> Result<Self, QueensError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(QueensError::OffBoard(row, col));
        }
        Ok(Self { row, col })
    }

    /// Row index.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Whether the cell is drawn dark in the checkerboard.
    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}
