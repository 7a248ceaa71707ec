//! Validated board side length.

use super::LadderError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board, always within `6..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "u8", into = "u8")]
pub struct BoardSize(u8);

impl BoardSize {
    /// Smallest playable board.
    pub const MIN: u8 = 6;
    /// Largest playable board.
    pub const MAX: u8 = 12;

    /// Validates a side length.
    #[instrument]
    pub fn new(size: u8) -> Result<Self, LadderError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(LadderError::SizeOutOfRange(size))
        }
    }

    /// Side length.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of cells, `n²`.
    pub fn cells(self) -> u16 {
        u16::from(self.0) * u16::from(self.0)
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = LadderError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BoardSize> for u8 {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}
