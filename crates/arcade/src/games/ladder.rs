use crate::{GameKind, Puzzle, SessionError};
use arcade_ladder::{BoardSize, LadderAnswer, LadderBoard, LadderSeed, LadderVerdict, Origin};

/// Guess the fewest dice throws from cell 1 to the last cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeLadder;

impl Puzzle for SnakeLadder {
    const KIND: GameKind = GameKind::SnakeLadder;

    type Config = BoardSize;
    type Seed = LadderSeed;
    type Board = LadderBoard;
    type Answer = LadderAnswer;
    type Verdict = LadderVerdict;

    /// Rejects seeds whose connectors fall off the board.
    fn board(_config: &BoardSize, seed: &LadderSeed) -> Result<LadderBoard, SessionError> {
        let board = LadderBoard::from_seed(seed);
        board.layout(Origin::TopLeft)?;
        Ok(board)
    }

    fn answer(_player: &str, board: &mut LadderBoard) -> Result<LadderAnswer, SessionError> {
        Ok(board.answer()?)
    }

    fn succeeded(verdict: &LadderVerdict) -> bool {
        verdict.correct
    }
}
