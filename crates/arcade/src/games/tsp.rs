use crate::{GameKind, Puzzle, SessionError};
use arcade_tsp::{TourPlan, TspAnswer, TspSeed, TspVerdict};

/// Pick cities and order them into the shortest round trip from home.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelingSalesman;

impl Puzzle for TravelingSalesman {
    const KIND: GameKind = GameKind::Tsp;

    type Config = ();
    type Seed = TspSeed;
    type Board = TourPlan;
    type Answer = TspAnswer;
    type Verdict = TspVerdict;

    fn board(_config: &(), seed: &TspSeed) -> Result<TourPlan, SessionError> {
        Ok(TourPlan::new(seed.home_city))
    }

    fn answer(_player: &str, board: &mut TourPlan) -> Result<TspAnswer, SessionError> {
        Ok(board.answer()?)
    }

    fn succeeded(verdict: &TspVerdict) -> bool {
        verdict.correct
    }
}
