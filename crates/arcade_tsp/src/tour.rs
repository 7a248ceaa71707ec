//! Selection set and ordered path for one tour.

use super::{City, DistanceMatrix, TspAnswer, TspError};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// Cities the player intends to visit and the order chosen so far.
///
/// The path is always a list of distinct selected cities and never
/// contains home.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TourPlan {
    home: City,
    selected: BTreeSet<City>,
    path: Vec<City>,
}

impl TourPlan {
    /// Empty plan starting and ending at `home`.
    pub fn new(home: City) -> Self {
        Self {
            home,
            ..Self::default()
        }
    }

    /// Start and end of the tour.
    pub fn home(&self) -> City {
        self.home
    }

    /// Cities picked for the tour.
    pub fn selected(&self) -> &BTreeSet<City> {
        &self.selected
    }

    /// Visiting order so far.
    pub fn path(&self) -> &[City] {
        &self.path
    }

    /// `(cities in path, cities selected)`.
    pub fn progress(&self) -> (usize, usize) {
        (self.path.len(), self.selected.len())
    }

    /// Flips selection of `city`. Returns whether it is now selected.
    ///
    /// Deselecting also drops the city from the path.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, city: City) -> Result<bool, TspError> {
        if city == self.home {
            return Err(TspError::HomeCity(city));
        }
        let now_selected = if self.selected.remove(&city) {
            self.path.retain(|&c| c != city);
            false
        } else {
            self.selected.insert(city);
            true
        };
        debug!(now_selected, selected = self.selected.len(), "Toggled city");
        debug_assert!(self.is_consistent(), "Tour plan invariants violated");
        Ok(now_selected)
    }

    /// Appends `city` to the path.
    #[instrument(skip(self))]
    pub fn add_to_path(&mut self, city: City) -> Result<(), TspError> {
        if !self.selected.contains(&city) {
            return Err(TspError::NotSelected(city));
        }
        if self.path.contains(&city) {
            return Err(TspError::AlreadyInPath(city));
        }
        self.path.push(city);
        debug_assert!(self.is_consistent(), "Tour plan invariants violated");
        Ok(())
    }

    /// Removes `city` from the path, keeping the order of the rest.
    #[instrument(skip(self))]
    pub fn remove_from_path(&mut self, city: City) -> Result<(), TspError> {
        let index = self
            .path
            .iter()
            .position(|&c| c == city)
            .ok_or(TspError::NotInPath(city))?;
        self.path.remove(index);
        Ok(())
    }

    /// Round-trip length: home, through the path in order, back home.
    /// An empty path is zero. Legs are summed in `u64`.
    #[instrument(skip(self, matrix), fields(path = ?self.path))]
    pub fn distance(&self, matrix: &DistanceMatrix) -> Result<u64, TspError> {
        if self.path.is_empty() {
            return Ok(0);
        }
        let stops: Vec<City> = std::iter::once(self.home)
            .chain(self.path.iter().copied())
            .chain(std::iter::once(self.home))
            .collect();
        stops
            .windows(2)
            .map(|leg| matrix.get(leg[0], leg[1]).map(u64::from))
            .sum()
    }

    /// Answer body for the solve call.
    ///
    /// Blocked until every selected city has a place in the path.
    #[instrument(skip(self))]
    pub fn answer(&self) -> Result<TspAnswer, TspError> {
        let (visited, selected) = self.progress();
        if selected == 0 {
            return Err(TspError::EmptyTour);
        }
        if visited != selected {
            return Err(TspError::IncompleteTour { visited, selected });
        }
        Ok(TspAnswer {
            visited_cities: self.path.clone(),
        })
    }

    fn is_consistent(&self) -> bool {
        let distinct: BTreeSet<City> = self.path.iter().copied().collect();
        distinct.len() == self.path.len()
            && distinct.is_subset(&self.selected)
            && !self.selected.contains(&self.home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn matrix() -> DistanceMatrix {
        DistanceMatrix::new(BTreeMap::from([
            (City::A, BTreeMap::from([(City::B, 50), (City::C, 70), (City::D, 90)])),
            (City::B, BTreeMap::from([(City::C, 60), (City::D, 80)])),
            (City::C, BTreeMap::from([(City::D, 55)])),
        ]))
    }

    #[test]
    fn test_single_city_round_trip() {
        let mut plan = TourPlan::new(City::A);
        plan.toggle(City::C).unwrap();
        plan.add_to_path(City::C).unwrap();
        assert_eq!(plan.distance(&matrix()), Ok(140));
    }

    #[test]
    fn test_multi_leg_distance() {
        let mut plan = TourPlan::new(City::A);
        for city in [City::B, City::C, City::D] {
            plan.toggle(city).unwrap();
            plan.add_to_path(city).unwrap();
        }
        // A-B 50, B-C 60, C-D 55, D-A 90.
        assert_eq!(plan.distance(&matrix()), Ok(255));
    }

    #[test]
    fn test_long_legs_do_not_overflow() {
        let far = DistanceMatrix::new(BTreeMap::from([
            (City::A, BTreeMap::from([(City::B, u32::MAX), (City::C, u32::MAX)])),
            (City::B, BTreeMap::from([(City::C, u32::MAX)])),
        ]));
        let mut plan = TourPlan::new(City::A);
        for city in [City::B, City::C] {
            plan.toggle(city).unwrap();
            plan.add_to_path(city).unwrap();
        }
        assert_eq!(plan.distance(&far), Ok(3 * u64::from(u32::MAX)));
    }

    #[test]
    fn test_empty_path_is_zero() {
        assert_eq!(TourPlan::new(City::A).distance(&matrix()), Ok(0));
    }

    #[test]
    fn test_home_cannot_be_selected() {
        let mut plan = TourPlan::new(City::B);
        assert_eq!(plan.toggle(City::B), Err(TspError::HomeCity(City::B)));
        assert!(plan.selected().is_empty());
    }

    #[test]
    fn test_path_rules() {
        let mut plan = TourPlan::new(City::A);
        assert_eq!(plan.add_to_path(City::B), Err(TspError::NotSelected(City::B)));
        plan.toggle(City::B).unwrap();
        plan.add_to_path(City::B).unwrap();
        assert_eq!(plan.add_to_path(City::B), Err(TspError::AlreadyInPath(City::B)));
        assert_eq!(plan.path(), &[City::B]);
    }

    #[test]
    fn test_deselect_drops_from_path() {
        let mut plan = TourPlan::new(City::A);
        for city in [City::B, City::C, City::D] {
            plan.toggle(city).unwrap();
            plan.add_to_path(city).unwrap();
        }
        assert_eq!(plan.toggle(City::C), Ok(false));
        assert_eq!(plan.path(), &[City::B, City::D]);
        assert_eq!(plan.progress(), (2, 2));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut plan = TourPlan::new(City::A);
        for city in [City::D, City::B, City::C] {
            plan.toggle(city).unwrap();
            plan.add_to_path(city).unwrap();
        }
        plan.remove_from_path(City::B).unwrap();
        assert_eq!(plan.path(), &[City::D, City::C]);
        assert_eq!(
            plan.remove_from_path(City::B),
            Err(TspError::NotInPath(City::B))
        );
    }

    #[test]
    fn test_answer_gating() {
        let mut plan = TourPlan::new(City::A);
        assert_eq!(plan.answer(), Err(TspError::EmptyTour));
        plan.toggle(City::B).unwrap();
        plan.toggle(City::C).unwrap();
        plan.add_to_path(City::C).unwrap();
        let err = plan.answer().unwrap_err();
        assert_eq!(err.to_string(), "Select cities visited: 1/2");
        plan.add_to_path(City::B).unwrap();
        assert_eq!(plan.answer().unwrap().visited_cities, vec![City::C, City::B]);
    }
}
