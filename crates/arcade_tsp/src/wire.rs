//! Request and response bodies exchanged with the scoring service.

use super::{City, DistanceMatrix};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /tsp/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspStart {
    /// Player starting the game.
    pub player_name: String,
}

/// Game data returned by `POST /tsp/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspSeed {
    /// Identifier for the solve call.
    pub game_id: String,
    /// Echo of the player name.
    #[serde(default)]
    pub player_name: String,
    /// Start and end of every tour.
    pub home_city: City,
    /// Road distances.
    pub distances: DistanceMatrix,
}

/// Body of `POST /tsp/solve/{gameId}`. Home is implied at both ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspAnswer {
    /// Visiting order.
    pub visited_cities: Vec<City>,
}

/// Verdict for a submitted tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TspVerdict {
    /// Whether the tour was optimal.
    pub correct: bool,
    /// Length of the submitted tour.
    pub user_distance: u32,
    /// Length of the optimal tour.
    pub min_distance: u32,
    /// Optimal tour including home at both ends.
    #[serde(default)]
    pub optimal_path: Vec<City>,
    /// Solver timings, keyed by algorithm name.
    #[serde(default)]
    pub algorithm_times: BTreeMap<String, u64>,
    /// Big-O notation per algorithm.
    #[serde(default)]
    pub algorithm_complexities: BTreeMap<String, String>,
    /// Human-readable summary.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_decodes() {
        let seed: TspSeed = serde_json::from_value(json!({
            "gameId": "t-1",
            "playerName": "ada",
            "homeCity": "C",
            "distances": {"C": {"A": 55, "B": 80}}
        }))
        .unwrap();
        assert_eq!(seed.home_city, City::C);
        assert_eq!(seed.distances.get(City::A, City::C), Ok(55));
    }

    #[test]
    fn test_answer_encodes_letters() {
        let body = serde_json::to_value(TspAnswer {
            visited_cities: vec![City::B, City::F],
        })
        .unwrap();
        assert_eq!(body, json!({"visitedCities": ["B", "F"]}));
    }

    #[test]
    fn test_verdict_decodes() {
        let verdict: TspVerdict = serde_json::from_value(json!({
            "correct": false,
            "userDistance": 320,
            "minDistance": 290,
            "optimalPath": ["A", "C", "B", "A"],
            "algorithmTimes": {"BruteForce": 1200, "NearestNeighbor": 40},
            "algorithmComplexities": {"BruteForce": "O(N!)"},
            "message": "Close"
        }))
        .unwrap();
        assert_eq!(verdict.optimal_path.len(), 4);
        assert_eq!(verdict.algorithm_complexities["BruteForce"], "O(N!)");
    }
}
