//! Player-side state for a snake-and-ladder round.

use super::{BoardSize, LadderAnswer, LadderError, LadderLayout, LadderSeed, Origin};
use std::collections::BTreeMap;
use tracing::instrument;

/// Board received from the service plus the player's guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LadderBoard {
    size: BoardSize,
    snakes: BTreeMap<u16, u16>,
    ladders: BTreeMap<u16, u16>,
    choices: Vec<u32>,
    guess: Option<u32>,
}

impl LadderBoard {
    /// Board built from a start response.
    pub fn from_seed(seed: &LadderSeed) -> Self {
        Self {
            size: seed.board_size,
            snakes: seed.snakes.clone(),
            ladders: seed.ladders.clone(),
            choices: seed.choices.clone(),
            guess: None,
        }
    }

    /// Side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Snake head → tail.
    pub fn snakes(&self) -> &BTreeMap<u16, u16> {
        &self.snakes
    }

    /// Ladder foot → top.
    pub fn ladders(&self) -> &BTreeMap<u16, u16> {
        &self.ladders
    }

    /// Candidate answers offered by the service.
    pub fn choices(&self) -> &[u32] {
        &self.choices
    }

    /// Current guess.
    pub fn guess(&self) -> Option<u32> {
        self.guess
    }

    /// Sets the guess; zero clears it.
    pub fn set_guess(&mut self, guess: u32) {
        self.guess = (guess > 0).then_some(guess);
    }

    /// Renderable layout for the current board.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn layout(&self, origin: Origin) -> Result<LadderLayout, LadderError> {
        LadderLayout::new(self.size, &self.snakes, &self.ladders, origin)
    }

    /// Answer body for the solve call.
    #[instrument(skip(self), fields(guess = ?self.guess))]
    pub fn answer(&self) -> Result<LadderAnswer, LadderError> {
        let user_guess = self.guess.ok_or(LadderError::MissingGuess)?;
        Ok(LadderAnswer { user_guess })
    }
}
