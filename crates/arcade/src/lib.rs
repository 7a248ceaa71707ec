//! Algorithm arcade: five puzzle games scored by a remote service.
//!
//! Each game is a [`Puzzle`]: a typed family of configuration, seed,
//! board, answer and verdict. A generic [`Session`] drives any puzzle
//! through `Setup → Configuring → Playing → Result`, talking to the
//! scoring service through a [`RemoteSession`] implementation.
//!
//! # Architecture
//!
//! - **Puzzles**: pure board logic lives in the `arcade_*` crates; the
//!   [`games`] module binds each to the [`Puzzle`] trait.
//! - **Session**: step machine with epoch-tagged tickets so late
//!   responses from an abandoned round are discarded.
//! - **Events**: typed [`Transition`] events go to subscribed
//!   [`TransitionListener`]s such as the [`ConfettiTrigger`].
//! - **Notifications**: user-facing messages go through an injected
//!   [`Notifier`].
//! - **Remote**: [`HttpArcadeClient`] speaks JSON to the service.
//!
//! # Example
//!
//! ```no_run
//! use arcade::{ArcadeConfig, HttpArcadeClient, Session, TracingNotifier, games::TowerOfHanoi};
//! use arcade_hanoi::PegCount;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ArcadeConfig::default();
//! let client = HttpArcadeClient::new(&config)?;
//! let mut session = Session::<TowerOfHanoi>::new(Arc::new(TracingNotifier));
//! session.configure("ada", PegCount::Three)?;
//! session.start(&client).await?;
//! session.try_play(|board| board.click(0))?;
//! session.try_play(|board| board.click(2))?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod comparison;
mod config;
mod error;
mod events;
pub mod games;
mod kind;
mod notify;
mod puzzle;
mod remote;
mod session;

// Crate-level exports - Configuration
pub use config::{ArcadeConfig, ConfigError};

// Crate-level exports - Errors
pub use error::{ErrorKind, RemoteError, SessionError};

// Crate-level exports - Game family
pub use kind::GameKind;
pub use puzzle::{GameId, Puzzle};

// Crate-level exports - Session state machine
pub use session::{Session, StartTicket, Step, SubmitTicket};

// Crate-level exports - Events and notifications
pub use events::{ConfettiTrigger, Transition, TransitionListener};
pub use notify::{NoticeLevel, Notifier, Toast, ToastQueue, TracingNotifier};

// Crate-level exports - Remote service
pub use comparison::{BarRow, Comparison, ComparisonGame, TrendChart, TrendSeries};
pub use remote::{HttpArcadeClient, RemoteSession, Started};
