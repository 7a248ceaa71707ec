//! Request and response bodies exchanged with the scoring service.

use serde::{Deserialize, Serialize};

/// Body of `POST /eight-queens/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensSubmission {
    /// Name of the player claiming the solution.
    pub player_name: String,
    /// Column of the queen in each row, row 0 first.
    pub queens: Vec<u8>,
}

/// Verdict returned for a submitted placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensVerdict {
    /// Whether no two queens attack each other.
    pub valid: bool,
    /// Whether this solution had not been discovered before.
    #[serde(default)]
    pub unique: bool,
    /// Human-readable summary.
    #[serde(default)]
    pub message: String,
    /// Distinct solutions discovered by all players so far.
    #[serde(default)]
    pub total_discovered: u32,
}

/// Aggregate discovery counts from `GET /eight-queens/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueensStats {
    /// Latest sequential solver run, in nanoseconds.
    pub sequential_time_ns: u64,
    /// Latest threaded solver run, in nanoseconds.
    pub threaded_time_ns: u64,
    /// Number of distinct solutions that exist (92).
    pub total_solutions_found: u32,
    /// Number of distinct solutions players have found.
    pub total_discovered_by_players: u32,
}
