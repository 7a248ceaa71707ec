//! Click-driven selection model over the peg stacks.

use super::{HanoiAnswer, HanoiError, Move, PegCount, Pegs, peg_label};
use tracing::{debug, instrument};

/// What a peg click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Click {
    /// The peg became the move source.
    Selected(usize),
    /// The selected peg was clicked again and released.
    Deselected(usize),
    /// A disk moved.
    Moved(Move),
    /// Nothing selected and the clicked peg is empty.
    Ignored,
}

/// Player-side puzzle state: stacks, pending selection, move log and
/// the minimum-move estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HanoiBoard {
    pegs: Pegs,
    selected: Option<usize>,
    moves: Vec<Move>,
    guess: Option<u32>,
}

impl HanoiBoard {
    /// Fresh board with every disk on peg A.
    #[instrument]
    pub fn new(count: PegCount, num_disks: u8) -> Self {
        Self {
            pegs: Pegs::new(count, num_disks),
            ..Self::default()
        }
    }

    /// Current stacks.
    pub fn pegs(&self) -> &Pegs {
        &self.pegs
    }

    /// Peg awaiting a destination click, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Accepted moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Player's minimum-move estimate.
    pub fn guess(&self) -> Option<u32> {
        self.guess
    }

    /// Records the player's minimum-move estimate.
    pub fn set_guess(&mut self, guess: u32) {
        self.guess = Some(guess);
    }

    /// Label of the peg every disk must end on.
    pub fn target_label(&self) -> char {
        peg_label(self.pegs.target())
    }

    /// Handles a click on peg `index`.
    ///
    /// First click on a non-empty peg selects it. A second click on the
    /// same peg deselects it; on another peg it attempts the move. An
    /// illegal move is rejected, deselects, and leaves the stacks and the
    /// log untouched.
    #[instrument(skip(self), fields(selected = ?self.selected))]
    pub fn click(&mut self, index: usize) -> Result<Click, HanoiError> {
        let top = self.pegs.top(index)?;

        let Some(source) = self.selected else {
            return Ok(match top {
                Some(_) => {
                    self.selected = Some(index);
                    Click::Selected(index)
                }
                None => Click::Ignored,
            });
        };

        self.selected = None;
        if source == index {
            return Ok(Click::Deselected(index));
        }

        let mv = self.pegs.apply(source, index)?;
        self.moves.push(mv);
        debug!(moves = self.moves.len(), "Move logged");
        Ok(Click::Moved(mv))
    }

    /// Builds the submission: estimate plus move log.
    #[instrument(skip(self))]
    pub fn answer(&self) -> Result<HanoiAnswer, HanoiError> {
        let user_min_moves = self
            .guess
            .filter(|&g| g > 0)
            .ok_or(HanoiError::MissingGuess)?;
        Ok(HanoiAnswer {
            user_min_moves,
            user_sequence: self.moves.iter().map(ToString::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_then_move() {
        let mut board = HanoiBoard::new(PegCount::Three, 3);
        assert_eq!(board.click(0), Ok(Click::Selected(0)));
        assert_eq!(board.click(2), Ok(Click::Moved(Move::new(0, 2, 1))));
        assert_eq!(board.selected(), None);
        assert_eq!(board.move_count(), 1);
        assert_eq!(board.pegs().stacks(), &[vec![3, 2], vec![], vec![1]]);
    }

    #[test]
    fn test_click_empty_peg_ignored() {
        let mut board = HanoiBoard::new(PegCount::Three, 3);
        assert_eq!(board.click(1), Ok(Click::Ignored));
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn test_same_peg_deselects() {
        let mut board = HanoiBoard::new(PegCount::Three, 3);
        board.click(0).unwrap();
        assert_eq!(board.click(0), Ok(Click::Deselected(0)));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_illegal_move_deselects_without_logging() {
        let mut board = HanoiBoard::new(PegCount::Three, 3);
        board.click(0).unwrap();
        board.click(2).unwrap();
        let before = board.pegs().clone();

        board.click(0).unwrap();
        assert_eq!(
            board.click(2),
            Err(HanoiError::LargerOnSmaller { disk: 2, top: 1 })
        );
        assert_eq!(board.selected(), None);
        assert_eq!(board.pegs(), &before);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn test_answer_requires_guess() {
        let mut board = HanoiBoard::new(PegCount::Three, 3);
        assert_eq!(board.answer(), Err(HanoiError::MissingGuess));
        board.set_guess(0);
        assert_eq!(board.answer(), Err(HanoiError::MissingGuess));
    }

    #[test]
    fn test_answer_carries_move_log() {
        let mut board = HanoiBoard::new(PegCount::Three, 2);
        board.click(0).unwrap();
        board.click(1).unwrap();
        board.click(0).unwrap();
        board.click(2).unwrap();
        board.set_guess(3);

        let answer = board.answer().unwrap();
        assert_eq!(answer.user_min_moves, 3);
        assert_eq!(answer.user_sequence, vec!["A -> B", "A -> C"]);
    }

    #[test]
    fn test_target_label() {
        assert_eq!(HanoiBoard::new(PegCount::Four, 4).target_label(), 'D');
    }
}
