//! Errors raised while building a tour.

use super::City;

/// Error that can occur when editing or submitting a tour.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TspError {
    /// The home city is always the start and end; it cannot be picked.
    #[display("{} is home and cannot be selected", _0)]
    HomeCity(City),

    /// Only selected cities can join the path.
    #[display("Select {} before adding it to the path", _0)]
    NotSelected(City),

    /// A city may appear in the path once.
    #[display("{} is already in the path", _0)]
    AlreadyInPath(City),

    /// Removal of a city that is not in the path.
    #[display("{} is not in the path", _0)]
    NotInPath(City),

    /// The matrix lacks an entry for a pair in either direction.
    #[display("No distance between {} and {}", from, to)]
    MissingDistance {
        /// First city.
        from: City,
        /// Second city.
        to: City,
    },

    /// Path does not yet cover every selected city.
    #[display("Select cities visited: {}/{}", visited, selected)]
    IncompleteTour {
        /// Cities in the path.
        visited: usize,
        /// Cities selected.
        selected: usize,
    },

    /// Nothing selected.
    #[display("Select at least one city to visit")]
    EmptyTour,
}

impl std::error::Error for TspError {}
