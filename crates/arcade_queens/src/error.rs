//! Errors raised by local queen placement checks.

/// Error that can occur when placing queens or preparing a submission.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum QueensError {
    /// Coordinates fall outside the 8×8 board.
    #[display("Square ({}, {}) is off the board", _0, _1)]
    OffBoard(u8, u8),

    /// A ninth queen was placed.
    #[display("Max 8 Queens")]
    TooManyQueens,

    /// Submission attempted with the wrong number of queens.
    #[display("Place exactly 8 Queens")]
    WrongCount {
        /// Queens currently on the board.
        placed: usize,
    },
}

impl std::error::Error for QueensError {}
