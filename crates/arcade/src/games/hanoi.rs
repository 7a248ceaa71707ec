use crate::{GameKind, Puzzle, SessionError};
use arcade_hanoi::{HanoiAnswer, HanoiBoard, HanoiSeed, HanoiVerdict, PegCount};

/// Shift the disk stack to the last peg; guess the minimum moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct TowerOfHanoi;

impl Puzzle for TowerOfHanoi {
    const KIND: GameKind = GameKind::Hanoi;

    type Config = PegCount;
    type Seed = HanoiSeed;
    type Board = HanoiBoard;
    type Answer = HanoiAnswer;
    type Verdict = HanoiVerdict;

    /// The service echoes the peg count; its value wins over the request.
    fn board(_config: &PegCount, seed: &HanoiSeed) -> Result<HanoiBoard, SessionError> {
        let count = PegCount::try_from(seed.num_pegs)?;
        if seed.num_disks == 0 {
            return Err(SessionError::InvalidSeed("no disks".into()));
        }
        Ok(HanoiBoard::new(count, seed.num_disks))
    }

    fn answer(_player: &str, board: &mut HanoiBoard) -> Result<HanoiAnswer, SessionError> {
        Ok(board.answer()?)
    }

    fn succeeded(verdict: &HanoiVerdict) -> bool {
        verdict.correct
    }
}
