use crate::{GameKind, Puzzle, SessionError};
use arcade_traffic::{TrafficAnswer, TrafficBoard, TrafficSeed, TrafficVerdict};

/// Estimate the maximum flow from junction A to T.
#[derive(Debug, Clone, Copy, Default)]
pub struct Traffic;

impl Puzzle for Traffic {
    const KIND: GameKind = GameKind::Traffic;

    type Config = ();
    type Seed = TrafficSeed;
    type Board = TrafficBoard;
    type Answer = TrafficAnswer;
    type Verdict = TrafficVerdict;

    /// Rejects networks naming junctions that cannot be drawn.
    fn board(_config: &(), seed: &TrafficSeed) -> Result<TrafficBoard, SessionError> {
        let board = TrafficBoard::from_seed(seed);
        board.layout()?;
        Ok(board)
    }

    fn answer(_player: &str, board: &mut TrafficBoard) -> Result<TrafficAnswer, SessionError> {
        Ok(board.answer()?)
    }

    fn succeeded(verdict: &TrafficVerdict) -> bool {
        verdict.correct
    }
}
