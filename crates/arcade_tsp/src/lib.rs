//! Traveling-salesman route building.
//!
//! The player starts at a home city, picks which other cities to visit
//! and orders them into a tour. This crate tracks the selection and the
//! ordered path, sums the round-trip distance from the service's
//! symmetric matrix, and lays the cities out for display. Whether the
//! tour is optimal is decided remotely.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod city;
mod distance;
mod error;
mod grid;
mod tour;
mod wire;

pub use city::City;
pub use distance::DistanceMatrix;
pub use error::TspError;
pub use grid::{CityRole, CityTile, GRID_COLUMNS, city_grid};
pub use tour::TourPlan;
pub use wire::{TspAnswer, TspSeed, TspStart, TspVerdict};
