//! Symmetric distance lookup.

use super::{City, TspError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Road distances between cities, keyed `from → to → km`.
///
/// The service sends a full matrix but lookups fall back to the reverse
/// direction so a half matrix works too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceMatrix(BTreeMap<City, BTreeMap<City, u32>>);

impl DistanceMatrix {
    /// Wraps a nested map.
    pub fn new(rows: BTreeMap<City, BTreeMap<City, u32>>) -> Self {
        Self(rows)
    }

    /// Distance between two cities. Zero from a city to itself.
    pub fn get(&self, from: City, to: City) -> Result<u32, TspError> {
        if from == to {
            return Ok(0);
        }
        self.lookup(from, to)
            .or_else(|| self.lookup(to, from))
            .ok_or(TspError::MissingDistance { from, to })
    }

    fn lookup(&self, from: City, to: City) -> Option<u32> {
        self.0.get(&from).and_then(|row| row.get(&to)).copied()
    }

    /// Every city that appears as a row or column.
    pub fn cities(&self) -> Vec<City> {
        let mut cities: Vec<City> = self
            .0
            .iter()
            .flat_map(|(from, row)| std::iter::once(*from).chain(row.keys().copied()))
            .collect();
        cities.sort_unstable();
        cities.dedup();
        cities
    }

    /// Distances from `home` to every other known city, in city order.
    pub fn from_home(&self, home: City) -> Vec<(City, u32)> {
        self.cities()
            .into_iter()
            .filter(|&city| city != home)
            .filter_map(|city| self.get(home, city).ok().map(|d| (city, d)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_symmetric_fallback() {
        let matrix: DistanceMatrix =
            serde_json::from_value(json!({"A": {"B": 50, "C": 70}, "B": {"C": 90}})).unwrap();
        assert_eq!(matrix.get(City::A, City::B), Ok(50));
        assert_eq!(matrix.get(City::B, City::A), Ok(50));
        assert_eq!(matrix.get(City::C, City::B), Ok(90));
        assert_eq!(matrix.get(City::C, City::C), Ok(0));
        assert_eq!(
            matrix.get(City::A, City::J),
            Err(TspError::MissingDistance {
                from: City::A,
                to: City::J
            })
        );
    }

    #[test]
    fn test_distance_table_from_home() {
        let matrix: DistanceMatrix =
            serde_json::from_value(json!({"B": {"A": 60, "C": 75}})).unwrap();
        assert_eq!(matrix.cities(), vec![City::A, City::B, City::C]);
        assert_eq!(matrix.from_home(City::B), vec![(City::A, 60), (City::C, 75)]);
    }
}
