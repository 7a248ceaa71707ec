//! Errors raised by peg-move validation.

/// Error that can occur when selecting pegs or moving disks.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum HanoiError {
    /// The puzzle only supports three or four pegs.
    #[display("Unsupported peg count {}: choose 3 or 4", _0)]
    UnsupportedPegCount(u8),

    /// Peg index outside the board.
    #[display("Peg {} does not exist", _0)]
    NoSuchPeg(usize),

    /// Source and destination are the same peg.
    #[display("Peg {} is both source and destination", _0)]
    SamePeg(char),

    /// The source peg holds no disk.
    #[display("Peg {} is empty", _0)]
    EmptyPeg(char),

    /// The moved disk is larger than the destination's top disk.
    #[display("Invalid Move! Disk {} cannot go on disk {}", disk, top)]
    LargerOnSmaller {
        /// Disk being moved.
        disk: u8,
        /// Current top disk of the destination.
        top: u8,
    },

    /// A stack was supplied that is not ordered largest to smallest.
    #[display("Peg {} is not ordered largest to smallest", _0)]
    Unsorted(char),

    /// Stacks do not hold disks `1..=n` exactly once.
    #[display("Every disk from 1 to n must sit on exactly one peg")]
    DisksNotConserved,

    /// Submission attempted without a minimum-move estimate.
    #[display("Enter your minimum-move estimate")]
    MissingGuess,
}

impl std::error::Error for HanoiError {}
