//! Tower-of-Hanoi peg stacks and move validation.
//!
//! All disks start on peg A, largest at the bottom. The player moves one
//! top disk at a time by clicking a source peg and then a destination
//! peg; a disk may never be placed on a smaller one. Accepted moves are
//! logged and submitted together with the player's estimate of the
//! minimum number of moves.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod invariants;
mod layout;
mod pegs;
mod wire;

pub use action::Move;
pub use board::{Click, HanoiBoard};
pub use error::HanoiError;
pub use invariants::{DisksConserved, HanoiInvariants, Invariant, InvariantViolation, SortedStacks};
pub use layout::{DISK_GAP, DISK_HEIGHT, DiskRect, PegLayout, StackLayout};
pub use pegs::{PegCount, Pegs, peg_label};
pub use wire::{HanoiAnswer, HanoiSeed, HanoiStart, HanoiVerdict};
