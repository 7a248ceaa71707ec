//! Request and response bodies exchanged with the scoring service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `POST /traffic/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficStart {
    /// Player starting the game.
    pub player_name: String,
}

/// One directed road. Endpoints stay as labels until laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Road {
    /// Tail junction label.
    pub from: String,
    /// Head junction label.
    pub to: String,
    /// Vehicles per minute.
    pub capacity: u32,
}

/// Game data returned by `POST /traffic/start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSeed {
    /// Identifier for the solve call.
    pub game_id: String,
    /// Echo of the player name.
    #[serde(default)]
    pub player_name: String,
    /// Road network.
    #[serde(default)]
    pub edges: Vec<Road>,
}

/// Body of `POST /traffic/solve/{gameId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficAnswer {
    /// Guessed maximum flow.
    pub user_guess: u32,
}

/// Verdict for a max-flow guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficVerdict {
    /// Maximum flow computed by the service.
    pub max_flow: u32,
    /// Whether the guess matched.
    pub correct: bool,
    /// Echo of the guess.
    pub user_guess: u32,
    /// Solver timings, keyed by algorithm name.
    #[serde(default)]
    pub algorithm_times: BTreeMap<String, u64>,
    /// Human-readable summary.
    #[serde(default)]
    pub message: String,
}
