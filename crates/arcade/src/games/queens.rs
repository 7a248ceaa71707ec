use crate::{GameKind, Puzzle, SessionError};
use arcade_queens::{QueensBoard, QueensSubmission, QueensVerdict};
use tracing::instrument;

/// Place eight queens so none attack each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct EightQueens;

impl Puzzle for EightQueens {
    const KIND: GameKind = GameKind::EightQueens;

    type Config = ();
    type Seed = ();
    type Board = QueensBoard;
    type Answer = QueensSubmission;
    type Verdict = QueensVerdict;

    fn board(_config: &(), _seed: &()) -> Result<QueensBoard, SessionError> {
        Ok(QueensBoard::new())
    }

    #[instrument(skip(board))]
    fn answer(player: &str, board: &mut QueensBoard) -> Result<QueensSubmission, SessionError> {
        let queens = board.submission()?;
        Ok(QueensSubmission {
            player_name: player.to_string(),
            queens,
        })
    }

    fn succeeded(verdict: &QueensVerdict) -> bool {
        verdict.valid
    }

    fn reconcile(board: &mut QueensBoard, verdict: &QueensVerdict) {
        board.reconcile(verdict.valid);
    }
}
