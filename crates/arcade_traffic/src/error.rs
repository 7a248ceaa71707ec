//! Errors raised by the traffic network.

/// Error that can occur when laying out or answering a traffic round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum TrafficError {
    /// Road endpoint is not one of `A..H, T`.
    #[display("Unknown junction '{}'", _0)]
    UnknownNode(String),

    /// Submission attempted without a guess.
    #[display("Enter your max-flow estimate")]
    MissingGuess,
}

impl std::error::Error for TrafficError {}
