//! The [`Puzzle`] family trait and game identifiers.

use super::{GameKind, SessionError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier the service assigns to one round.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub struct GameId(String);

static LOCAL_IDS: AtomicU64 = AtomicU64::new(0);

impl GameId {
    /// Wraps a service-assigned id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints an id for games the service never starts.
    pub fn mint(kind: GameKind) -> Self {
        let n = LOCAL_IDS.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "{}-{}-{}",
            kind.path_segment(),
            chrono::Utc::now().timestamp_millis(),
            n
        ))
    }

    /// The id as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One game's typed shapes and local rules.
///
/// The session machine and the remote client are generic over this
/// trait; everything game-specific goes through it.
pub trait Puzzle: Send + Sync + 'static {
    /// Which game this is.
    const KIND: GameKind;

    /// Choices made before starting: board size, peg count.
    type Config: Clone + Debug + Default + Send + Sync;
    /// Data the service returns on start.
    type Seed: Clone + Debug + DeserializeOwned + Send + Sync;
    /// Local play state.
    type Board: Clone + Debug + Default + Send + Sync;
    /// Body of the submit call.
    type Answer: Clone + Debug + Serialize + Send + Sync;
    /// Service verdict.
    type Verdict: Clone + Debug + DeserializeOwned + Send + Sync;

    /// Builds a fresh board for a started round.
    fn board(config: &Self::Config, seed: &Self::Seed) -> Result<Self::Board, SessionError>;

    /// Extracts the answer, or explains why the board is not ready.
    ///
    /// Takes the board mutably so validation can refresh derived state
    /// such as conflict highlighting.
    fn answer(player: &str, board: &mut Self::Board) -> Result<Self::Answer, SessionError>;

    /// Whether the verdict is a win.
    fn succeeded(verdict: &Self::Verdict) -> bool;

    /// Brings local state in line with the verdict.
    fn reconcile(_board: &mut Self::Board, _verdict: &Self::Verdict) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_ids_are_unique() {
        let a = GameId::mint(GameKind::EightQueens);
        let b = GameId::mint(GameKind::EightQueens);
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("eight-queens-"));
    }
}
