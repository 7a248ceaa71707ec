//! Eight-queens placement and conflict validation.
//!
//! The player toggles queens on an 8×8 board. Before an answer is sent
//! to the scoring service the placement is checked locally: exactly
//! eight queens must be on the board, and any pair of queens sharing a
//! row, column or diagonal is flagged in the conflict set so it can be
//! highlighted. The service's verdict remains authoritative.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod conflicts;
mod error;
mod square;
mod wire;

pub use board::{QUEEN_COUNT, QueensBoard, Toggle};
pub use conflicts::{attacks, find_conflicts};
pub use error::QueensError;
pub use square::{BOARD_SIZE, Square};
pub use wire::{QueensStats, QueensSubmission, QueensVerdict};
