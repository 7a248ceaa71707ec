//! Request and response bodies exchanged with the scoring service.

use super::BoardSize;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /snakeladder/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderStart {
    /// Player starting the game.
    pub player_name: String,
    /// Requested side length.
    pub board_size: BoardSize,
}

/// Game data returned by `POST /snakeladder/start`.
///
/// Snake and ladder maps go from the cell you land on to the cell you end
/// up on. JSON object keys arrive as strings and parse into cell numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderSeed {
    /// Identifier for the solve call.
    pub game_id: String,
    /// Echo of the player name.
    #[serde(default)]
    pub player_name: String,
    /// Side length of the generated board.
    pub board_size: BoardSize,
    /// Snake head → tail.
    #[serde(default)]
    pub snakes: BTreeMap<u16, u16>,
    /// Ladder foot → top.
    #[serde(default)]
    pub ladders: BTreeMap<u16, u16>,
    /// Candidate answers offered to the player.
    #[serde(default)]
    pub choices: Vec<u32>,
}

/// Body of `POST /snakeladder/solve/{gameId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderAnswer {
    /// Guessed minimum number of throws.
    pub user_guess: u32,
}

/// Verdict for a snake-and-ladder guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LadderVerdict {
    /// Minimum throws computed by the service.
    pub min_dice_throws: u32,
    /// Whether the guess matched.
    pub correct: bool,
    /// Echo of the guess.
    pub user_guess: u32,
    /// Solver timings in microseconds, keyed by algorithm name.
    #[serde(default)]
    pub algorithm_times: BTreeMap<String, u64>,
    /// Human-readable summary.
    #[serde(default)]
    pub message: String,
}

/// One row of `GET /snakeladder/leaderboard`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Winning player.
    pub player_name: String,
    /// Board the win was on.
    pub board_size: u8,
    /// Correct answer for that board.
    pub min_dice_throws: u32,
    /// Breadth-first search time.
    #[serde(default)]
    pub bfs_time: u64,
    /// Dijkstra time.
    #[serde(default)]
    pub dijkstra_time: u64,
    /// When the win was recorded.
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
