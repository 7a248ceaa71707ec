//! [`Puzzle`](crate::Puzzle) bindings for the five games.
//!
//! Each game is a zero-sized marker naming its typed shapes. Board logic
//! lives in the `arcade_*` crates.

mod hanoi;
mod ladder;
mod queens;
mod traffic;
mod tsp;

pub use hanoi::TowerOfHanoi;
pub use ladder::SnakeLadder;
pub use queens::EightQueens;
pub use traffic::Traffic;
pub use tsp::TravelingSalesman;
