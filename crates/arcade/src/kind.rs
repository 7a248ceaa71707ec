//! The five games and their service routes.

use serde::{Deserialize, Serialize};

/// Game identity, keyed by the service's path segment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum GameKind {
    /// Minimum dice throws on a snake-and-ladder board.
    #[strum(serialize = "snakeladder")]
    #[serde(rename = "snakeladder")]
    SnakeLadder,
    /// Maximum flow through a road network.
    #[strum(serialize = "traffic")]
    #[serde(rename = "traffic")]
    Traffic,
    /// Shortest round trip over chosen cities.
    #[strum(serialize = "tsp")]
    #[serde(rename = "tsp")]
    Tsp,
    /// Minimum moves to shift a disk stack.
    #[strum(serialize = "hanoi")]
    #[serde(rename = "hanoi")]
    Hanoi,
    /// Eight non-attacking queens.
    #[strum(serialize = "eight-queens")]
    #[serde(rename = "eight-queens")]
    EightQueens,
}

impl GameKind {
    /// Path segment under the service root.
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::SnakeLadder => "snakeladder",
            Self::Traffic => "traffic",
            Self::Tsp => "tsp",
            Self::Hanoi => "hanoi",
            Self::EightQueens => "eight-queens",
        }
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::SnakeLadder => "Snake & Ladder",
            Self::Traffic => "Traffic Simulation",
            Self::Tsp => "Traveling Salesman",
            Self::Hanoi => "Tower of Hanoi",
            Self::EightQueens => "Eight Queens",
        }
    }

    /// Whether trend charts join points with lines. Hanoi points stay
    /// unjoined since its rounds mix peg counts.
    pub fn draws_trend_lines(self) -> bool {
        self != Self::Hanoi
    }
}
