//! Algorithm timing history and the chart views derived from it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One past round's solver timings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonGame {
    /// Round id.
    #[serde(default)]
    pub game_id: Option<String>,
    /// Who played it.
    #[serde(default)]
    pub player_name: Option<String>,
    /// When it was recorded.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    /// Hanoi only.
    #[serde(default)]
    pub num_pegs: Option<u8>,
    /// Microseconds per algorithm.
    #[serde(default)]
    pub algorithm_times: BTreeMap<String, f64>,
}

/// Body of `GET /{game}/comparison`. Games arrive newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Rounds on record.
    #[serde(default)]
    pub count: u32,
    /// Mean microseconds per algorithm.
    #[serde(default)]
    pub averages: BTreeMap<String, f64>,
    /// Recent rounds, newest first.
    #[serde(default)]
    pub games: Vec<ComparisonGame>,
    /// Hanoi rounds with three pegs.
    #[serde(default, rename = "count3Peg")]
    pub count_three_peg: Option<u32>,
    /// Hanoi rounds with four pegs.
    #[serde(default, rename = "count4Peg")]
    pub count_four_peg: Option<u32>,
}

/// One bar of the averages chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    /// Algorithm name.
    pub algorithm: String,
    /// Mean microseconds.
    pub average: f64,
}

/// One algorithm's line across rounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    /// Algorithm name.
    pub algorithm: String,
    /// Per-round time, `None` where the round lacks this algorithm.
    pub values: Vec<Option<f64>>,
}

/// Timings over rounds, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    /// `Game 1`, `Game 2`, …
    pub labels: Vec<String>,
    /// One series per algorithm seen in any round.
    pub series: Vec<TrendSeries>,
    /// Whether points are joined.
    pub lines: bool,
}

impl Comparison {
    /// Averages as bars, in name order.
    pub fn bars(&self) -> Vec<BarRow> {
        self.averages
            .iter()
            .map(|(algorithm, &average)| BarRow {
                algorithm: algorithm.clone(),
                average,
            })
            .collect()
    }

    /// Algorithm with the lowest average.
    pub fn fastest(&self) -> Option<(&str, f64)> {
        self.averages
            .iter()
            .min_by(|a, b| a.1.total_cmp(b.1))
            .map(|(name, &avg)| (name.as_str(), avg))
    }

    /// Per-round timings, oldest first, for every algorithm any round ran.
    pub fn trend(&self, lines: bool) -> TrendChart {
        let games: Vec<&ComparisonGame> = self.games.iter().rev().collect();
        let mut algorithms: Vec<&String> = Vec::new();
        for name in games.iter().flat_map(|g| g.algorithm_times.keys()) {
            if !algorithms.contains(&name) {
                algorithms.push(name);
            }
        }
        let series = algorithms
            .into_iter()
            .map(|algorithm| TrendSeries {
                algorithm: algorithm.clone(),
                values: games
                    .iter()
                    .map(|g| g.algorithm_times.get(algorithm).copied())
                    .collect(),
            })
            .collect();
        TrendChart {
            labels: (1..=games.len()).map(|i| format!("Game {}", i)).collect(),
            series,
            lines,
        }
    }
}
