//! Traffic network layout for max-flow estimation.
//!
//! The service generates a road network from source `A` to sink `T`
//! with a capacity on every road. The player estimates the maximum flow;
//! this crate places the nine junctions on a fixed canvas, positions
//! each road and its capacity label, and holds the player's guess.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod layout;
mod node;
mod wire;

pub use board::TrafficBoard;
pub use error::TrafficError;
pub use layout::{CANVAS_HEIGHT, CANVAS_WIDTH, EdgeLayout, GraphLayout};
pub use node::{Node, Position};
pub use wire::{Road, TrafficAnswer, TrafficSeed, TrafficStart, TrafficVerdict};
