//! Snake-and-ladder board geometry.
//!
//! The board holds `n²` numbered cells laid out boustrophedon style:
//! cell 1 sits bottom-left, rows alternate direction, and the last cell
//! ends the top row. This crate maps cell numbers to grid positions and
//! back, places cell centres in normalised board coordinates, and builds
//! the curved connectors drawn for snakes and ladders. The player's task
//! is to guess the minimum number of dice throws; the scoring service
//! computes the real answer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod connectors;
mod error;
mod layout;
mod mapper;
mod size;
mod wire;

pub use board::LadderBoard;
pub use connectors::{CURVE_BEND, Connector, ConnectorKind, Point};
pub use error::LadderError;
pub use layout::{CellTile, LadderLayout};
pub use mapper::{GridPos, Origin, cell_at, cell_center, cell_position, render_order};
pub use size::BoardSize;
pub use wire::{LadderAnswer, LadderSeed, LadderStart, LadderVerdict, LeaderboardEntry};
