//! Request and response bodies exchanged with the scoring service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /hanoi/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HanoiStart {
    /// Player starting the game.
    pub player_name: String,
    /// 3 or 4.
    pub num_pegs: u8,
}

/// Game data returned by `POST /hanoi/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HanoiSeed {
    /// Identifier for the solve call.
    pub game_id: String,
    /// Echo of the player name.
    #[serde(default)]
    pub player_name: String,
    /// Disks stacked on peg A.
    pub num_disks: u8,
    /// Pegs on the board.
    pub num_pegs: u8,
}

/// Body of `POST /hanoi/solve/{gameId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HanoiAnswer {
    /// Player's estimate of the optimal move count.
    pub user_min_moves: u32,
    /// Moves the player made, as `"A -> C"`.
    pub user_sequence: Vec<String>,
}

/// Verdict for a Hanoi answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HanoiVerdict {
    /// Optimal number of moves.
    pub optimal_min_moves: u32,
    /// Whether the estimate matched.
    pub correct: bool,
    /// Echo of the estimate.
    pub user_min_moves: u32,
    /// Solver timings in microseconds, keyed by algorithm name.
    #[serde(default)]
    pub algorithm_times: BTreeMap<String, u64>,
    /// Human-readable summary.
    #[serde(default)]
    pub message: String,
}
