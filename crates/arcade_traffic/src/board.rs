//! Player-side state for a traffic round.

use super::{GraphLayout, Road, TrafficAnswer, TrafficError, TrafficSeed};
use tracing::instrument;

/// Network received from the service plus the player's guess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficBoard {
    roads: Vec<Road>,
    guess: Option<u32>,
}

impl TrafficBoard {
    /// Board built from a start response.
    pub fn from_seed(seed: &TrafficSeed) -> Self {
        Self {
            roads: seed.edges.clone(),
            guess: None,
        }
    }

    /// Roads as sent by the service.
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Current guess.
    pub fn guess(&self) -> Option<u32> {
        self.guess
    }

    /// Sets the guess; zero clears it.
    pub fn set_guess(&mut self, guess: u32) {
        self.guess = (guess > 0).then_some(guess);
    }

    /// Drawable network.
    pub fn layout(&self) -> Result<GraphLayout, TrafficError> {
        GraphLayout::new(&self.roads)
    }

    /// Answer body for the solve call.
    #[instrument(skip(self), fields(guess = ?self.guess))]
    pub fn answer(&self) -> Result<TrafficAnswer, TrafficError> {
        let user_guess = self.guess.ok_or(TrafficError::MissingGuess)?;
        Ok(TrafficAnswer { user_guess })
    }
}
