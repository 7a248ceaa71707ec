//! Session and remote error types.

use super::Step;
use arcade_hanoi::HanoiError;
use arcade_ladder::LadderError;
use arcade_queens::QueensError;
use arcade_traffic::TrafficError;
use arcade_tsp::TspError;
use derive_more::{Display, Error};
use tracing::instrument;

/// Broad class of a [`SessionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// Player supplied something unusable: empty name, incomplete
    /// placement, missing guess.
    Input,
    /// Request conflicts with current state: illegal move, wrong step,
    /// stale response.
    Consistency,
    /// Network, HTTP or decoding failure.
    Remote,
}

/// Scoring service failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Remote error: {} at {}:{}", message, file, line)]
pub struct RemoteError {
    /// Error message.
    pub message: String,
    /// HTTP status, when the service answered.
    pub status: Option<u16>,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RemoteError {
    /// Creates a new remote error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            status: None,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Non-success HTTP status from `url`.
    #[track_caller]
    pub fn status(status: u16, url: &str) -> Self {
        Self {
            status: Some(status),
            ..Self::new(format!("{} returned HTTP {}", url, status))
        }
    }
}

impl From<reqwest::Error> for RemoteError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self {
            status: err.status().map(|s| s.as_u16()),
            ..Self::new(format!("HTTP error: {}", err))
        }
    }
}

/// Error that can occur while driving a puzzle session.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SessionError {
    /// Player name empty or whitespace.
    #[display("Please enter your name")]
    EmptyName,

    /// Operation not allowed in the current step.
    #[display("Cannot {} while in {}", action, step)]
    WrongStep {
        /// What was attempted.
        action: &'static str,
        /// Step the session was in.
        step: Step,
    },

    /// Submission before the service assigned a game id.
    #[display("No active game")]
    MissingGameId,

    /// An answer for this round is already on its way.
    #[display("Answer already sent, waiting for the verdict")]
    SubmitInFlight,

    /// Response for a round that is no longer active.
    #[display("Discarded stale response")]
    Stale,

    /// Seed data the board cannot be built from.
    #[display("Invalid game data: {}", _0)]
    InvalidSeed(String),

    /// Eight-queens rule.
    #[display("{}", _0)]
    Queens(QueensError),

    /// Tower-of-Hanoi rule.
    #[display("{}", _0)]
    Hanoi(HanoiError),

    /// Snake-and-ladder rule.
    #[display("{}", _0)]
    Ladder(LadderError),

    /// Traveling-salesman rule.
    #[display("{}", _0)]
    Tsp(TspError),

    /// Traffic rule.
    #[display("{}", _0)]
    Traffic(TrafficError),

    /// Scoring service failure.
    #[display("{}", _0)]
    Remote(RemoteError),
}

impl SessionError {
    /// Which class of error this is.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyName | Self::MissingGameId => ErrorKind::Input,
            Self::WrongStep { .. } | Self::SubmitInFlight | Self::Stale => {
                ErrorKind::Consistency
            }
            Self::InvalidSeed(_) | Self::Remote(_) => ErrorKind::Remote,
            Self::Queens(_) => ErrorKind::Input,
            Self::Hanoi(HanoiError::MissingGuess) => ErrorKind::Input,
            Self::Hanoi(_) => ErrorKind::Consistency,
            Self::Ladder(LadderError::NoSuchCell { .. } | LadderError::OffGrid { .. }) => {
                ErrorKind::Remote
            }
            Self::Ladder(_) => ErrorKind::Input,
            Self::Tsp(TspError::HomeCity(_) | TspError::AlreadyInPath(_) | TspError::NotInPath(_)) => {
                ErrorKind::Consistency
            }
            Self::Tsp(_) => ErrorKind::Input,
            Self::Traffic(TrafficError::UnknownNode(_)) => ErrorKind::Remote,
            Self::Traffic(_) => ErrorKind::Input,
        }
    }
}

impl std::error::Error for SessionError {}

impl PartialEq for RemoteError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message && self.status == other.status
    }
}

impl From<QueensError> for SessionError {
    fn from(err: QueensError) -> Self {
        Self::Queens(err)
    }
}

impl From<HanoiError> for SessionError {
    fn from(err: HanoiError) -> Self {
        Self::Hanoi(err)
    }
}

impl From<LadderError> for SessionError {
    fn from(err: LadderError) -> Self {
        Self::Ladder(err)
    }
}

impl From<TspError> for SessionError {
    fn from(err: TspError) -> Self {
        Self::Tsp(err)
    }
}

impl From<TrafficError> for SessionError {
    fn from(err: TrafficError) -> Self {
        Self::Traffic(err)
    }
}

impl From<RemoteError> for SessionError {
    fn from(err: RemoteError) -> Self {
        Self::Remote(err)
    }
}
