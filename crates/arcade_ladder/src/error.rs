//! Errors raised by board configuration and geometry.

/// Error that can occur when configuring or laying out a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum LadderError {
    /// Board size outside the playable range.
    #[display("Board size must be between 6 and 12 (got {})", _0)]
    SizeOutOfRange(u8),

    /// Cell number outside `1..=n²`.
    #[display("Cell {} is not on a {}x{} board", cell, size, size)]
    NoSuchCell {
        /// Offending cell number.
        cell: u16,
        /// Board side length.
        size: u8,
    },

    /// Grid coordinates outside the board.
    #[display("Position row {} col {} is not on a {}x{} board", row, col, size, size)]
    OffGrid {
        /// Row from the bottom.
        row: u8,
        /// Column from the left.
        col: u8,
        /// Board side length.
        size: u8,
    },

    /// Submission attempted without a guess.
    #[display("Pick the minimum number of dice throws")]
    MissingGuess,
}

impl std::error::Error for LadderError {}
