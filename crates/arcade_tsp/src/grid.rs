//! City picker layout.

use super::{City, TourPlan};
use strum::IntoEnumIterator;

/// Cities per grid row.
pub const GRID_COLUMNS: usize = 5;

/// How a city tile is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum CityRole {
    /// Start and end of the tour.
    #[strum(to_string = "home")]
    Home,
    /// Picked for the tour.
    #[strum(to_string = "selected")]
    Selected,
    /// Not picked.
    #[strum(to_string = "idle")]
    Idle,
}

/// One tile of the city grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityTile {
    /// City shown.
    pub city: City,
    /// Grid row.
    pub row: usize,
    /// Grid column.
    pub col: usize,
    /// Highlight.
    pub role: CityRole,
    /// 1-based position in the path, if placed.
    pub stop: Option<usize>,
}

/// Every city in label order, wrapped into rows of [`GRID_COLUMNS`].
pub fn city_grid(plan: &TourPlan) -> Vec<CityTile> {
    City::iter()
        .enumerate()
        .map(|(i, city)| {
            let role = if city == plan.home() {
                CityRole::Home
            } else if plan.selected().contains(&city) {
                CityRole::Selected
            } else {
                CityRole::Idle
            };
            CityTile {
                city,
                row: i / GRID_COLUMNS,
                col: i % GRID_COLUMNS,
                role,
                stop: plan.path().iter().position(|&c| c == city).map(|p| p + 1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape_and_roles() {
        let mut plan = TourPlan::new(City::C);
        plan.toggle(City::F).unwrap();
        plan.toggle(City::A).unwrap();
        plan.add_to_path(City::A).unwrap();

        let grid = city_grid(&plan);
        assert_eq!(grid.len(), 10);
        assert_eq!(grid[2].role, CityRole::Home);
        assert_eq!(grid[5].city, City::F);
        assert_eq!((grid[5].row, grid[5].col), (1, 0));
        assert_eq!(grid[5].role, CityRole::Selected);
        assert_eq!(grid[5].stop, None);
        assert_eq!(grid[0].stop, Some(1));
        assert_eq!(grid[9].role, CityRole::Idle);
    }
}
