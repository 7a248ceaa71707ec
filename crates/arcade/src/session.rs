//! Step machine driving one puzzle from name entry to verdict.
//!
//! Remote calls are split in two halves. `begin_*` checks the step and
//! hands out a ticket tagged with the session epoch; `finish_*` applies
//! the response only if the ticket still matches. Resetting or retrying
//! bumps the epoch, so a response that arrives for an abandoned round
//! is dropped with [`SessionError::Stale`] and changes nothing.
//!
//! At most one submit ticket is outstanding per round. A second
//! `begin_submit` fails with [`SessionError::SubmitInFlight`] until the
//! first ticket is finished or cancelled.

use super::{
    ErrorKind, GameId, NoticeLevel, Notifier, Puzzle, RemoteError, RemoteSession, SessionError,
    Started, Transition, TransitionListener,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum::Display)]
pub enum Step {
    /// Collecting the player name.
    #[default]
    Setup,
    /// Choosing options and waiting to start.
    Configuring,
    /// Round in progress.
    Playing,
    /// Verdict on screen.
    Result,
}

/// Permission to apply a start response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartTicket {
    epoch: u64,
}

/// Permission to apply a submit response, plus the request to send.
#[derive(Debug, Clone)]
pub struct SubmitTicket<P: Puzzle> {
    epoch: u64,
    game_id: GameId,
    answer: P::Answer,
}

impl<P: Puzzle> SubmitTicket<P> {
    /// Round the answer belongs to.
    pub fn game_id(&self) -> &GameId {
        &self.game_id
    }

    /// Body to submit.
    pub fn answer(&self) -> &P::Answer {
        &self.answer
    }
}

/// One player's run through one puzzle.
pub struct Session<P: Puzzle> {
    player_name: String,
    step: Step,
    game_id: Option<GameId>,
    config: P::Config,
    seed: Option<P::Seed>,
    board: P::Board,
    outcome: Option<P::Verdict>,
    error: Option<SessionError>,
    epoch: u64,
    pending_submit: Option<u64>,
    listeners: Vec<Arc<dyn TransitionListener>>,
    notifier: Arc<dyn Notifier>,
}

impl<P: Puzzle> fmt::Debug for Session<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("game", &P::KIND)
            .field("player_name", &self.player_name)
            .field("step", &self.step)
            .field("game_id", &self.game_id)
            .field("epoch", &self.epoch)
            .field("pending_submit", &self.pending_submit)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<P: Puzzle> Session<P> {
    /// Fresh session in [`Step::Setup`].
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            player_name: String::new(),
            step: Step::Setup,
            game_id: None,
            config: P::Config::default(),
            seed: None,
            board: P::Board::default(),
            outcome: None,
            error: None,
            epoch: 0,
            pending_submit: None,
            listeners: Vec::new(),
            notifier,
        }
    }

    /// Adds a transition listener.
    pub fn subscribe(&mut self, listener: Arc<dyn TransitionListener>) {
        self.listeners.push(listener);
    }

    /// Player name, trimmed.
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Current step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// Id of the active round.
    pub fn game_id(&self) -> Option<&GameId> {
        self.game_id.as_ref()
    }

    /// Chosen options.
    pub fn config(&self) -> &P::Config {
        &self.config
    }

    /// Start data of the active round.
    pub fn seed(&self) -> Option<&P::Seed> {
        self.seed.as_ref()
    }

    /// Local play state.
    pub fn board(&self) -> &P::Board {
        &self.board
    }

    /// Verdict of the finished round.
    pub fn outcome(&self) -> Option<&P::Verdict> {
        self.outcome.as_ref()
    }

    /// Last error, cleared by the next successful action.
    pub fn error(&self) -> Option<&SessionError> {
        self.error.as_ref()
    }

    /// Counter bumped whenever the active round is abandoned or replaced.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether an answer has been handed out and not yet resolved.
    pub fn is_submitting(&self) -> bool {
        self.pending_submit.is_some()
    }

    fn require(&self, step: Step, action: &'static str) -> Result<(), SessionError> {
        if self.step == step {
            Ok(())
        } else {
            Err(SessionError::WrongStep {
                action,
                step: self.step,
            })
        }
    }

    fn transition(&mut self, to: Step, success: Option<bool>) {
        let event = Transition {
            game: P::KIND,
            from: self.step,
            to,
            success,
        };
        info!(game = %P::KIND, from = %event.from, to = %event.to, ?success, "Step transition");
        self.step = to;
        for listener in &self.listeners {
            listener.on_transition(&event);
        }
    }

    /// Records and announces an error, then hands it back.
    fn fail(&mut self, err: SessionError) -> SessionError {
        let level = match err.kind() {
            ErrorKind::Remote => NoticeLevel::Error,
            _ => NoticeLevel::Warning,
        };
        self.notifier.notify(level, &err.to_string());
        self.error = Some(err.clone());
        err
    }

    /// Clears puzzle state from any previous round.
    fn clear_round(&mut self) {
        self.game_id = None;
        self.seed = None;
        self.board = P::Board::default();
        self.outcome = None;
        self.error = None;
        self.pending_submit = None;
    }

    /// Accepts the player name and options, moving to
    /// [`Step::Configuring`].
    #[instrument(skip(self, name), fields(game = %P::KIND))]
    pub fn configure(&mut self, name: &str, config: P::Config) -> Result<(), SessionError> {
        self.require(Step::Setup, "enter a name")?;
        let name = name.trim();
        if name.is_empty() {
            return Err(self.fail(SessionError::EmptyName));
        }
        self.player_name = name.to_string();
        self.config = config;
        self.error = None;
        self.transition(Step::Configuring, None);
        Ok(())
    }

    /// Changes options before starting.
    #[instrument(skip(self))]
    pub fn set_config(&mut self, config: P::Config) -> Result<(), SessionError> {
        self.require(Step::Configuring, "change options")?;
        self.config = config;
        Ok(())
    }

    /// Checks that a start may be sent.
    #[instrument(skip(self), fields(game = %P::KIND, epoch = self.epoch))]
    pub fn begin_start(&self) -> Result<StartTicket, SessionError> {
        self.require(Step::Configuring, "start")?;
        Ok(StartTicket { epoch: self.epoch })
    }

    /// Applies a start response.
    ///
    /// On success the round's id, seed and a fresh board replace any
    /// previous round and the session moves to [`Step::Playing`]. On
    /// failure the session stays in [`Step::Configuring`].
    #[instrument(skip(self, result), fields(game = %P::KIND, epoch = self.epoch))]
    pub fn finish_start(
        &mut self,
        ticket: StartTicket,
        result: Result<Started<P>, RemoteError>,
    ) -> Result<(), SessionError> {
        if ticket.epoch != self.epoch || self.step != Step::Configuring {
            warn!(ticket = ticket.epoch, step = %self.step, "Discarding stale start response");
            return Err(SessionError::Stale);
        }
        let started = result.map_err(|e| self.fail(e.into()))?;
        let board = P::board(&self.config, &started.seed).map_err(|e| self.fail(e))?;

        self.clear_round();
        debug!(game_id = %started.game_id, "Round started");
        self.game_id = Some(started.game_id);
        self.seed = Some(started.seed);
        self.board = board;
        self.epoch += 1;
        self.transition(Step::Playing, None);
        Ok(())
    }

    /// Requests a new round from the service.
    pub async fn start<R>(&mut self, remote: &R) -> Result<(), SessionError>
    where
        R: RemoteSession<P> + ?Sized,
    {
        let ticket = self.begin_start()?;
        let result = remote.start(&self.player_name, &self.config).await;
        self.finish_start(ticket, result)
    }

    /// Runs a local action on the board. Only while playing.
    pub fn play<T>(&mut self, action: impl FnOnce(&mut P::Board) -> T) -> Result<T, SessionError> {
        self.require(Step::Playing, "play")?;
        Ok(action(&mut self.board))
    }

    /// Runs a fallible local action on the board. A rejected action is
    /// recorded and announced; an accepted one clears the last error.
    pub fn try_play<T, E>(
        &mut self,
        action: impl FnOnce(&mut P::Board) -> Result<T, E>,
    ) -> Result<T, SessionError>
    where
        E: Into<SessionError>,
    {
        self.require(Step::Playing, "play")?;
        match action(&mut self.board) {
            Ok(value) => {
                self.error = None;
                Ok(value)
            }
            Err(e) => Err(self.fail(e.into())),
        }
    }

    /// Validates the board and prepares the answer.
    ///
    /// Fails without touching the network when no round id is assigned,
    /// the board is not ready, or an earlier ticket is still out.
    #[instrument(skip(self), fields(game = %P::KIND, epoch = self.epoch))]
    pub fn begin_submit(&mut self) -> Result<SubmitTicket<P>, SessionError> {
        self.require(Step::Playing, "submit")?;
        if self.pending_submit.is_some() {
            warn!("Submit already in flight");
            return Err(SessionError::SubmitInFlight);
        }
        let game_id = self
            .game_id
            .clone()
            .ok_or(SessionError::MissingGameId)
            .map_err(|e| self.fail(e))?;
        let answer = P::answer(&self.player_name, &mut self.board).map_err(|e| self.fail(e))?;
        debug!(?answer, "Answer ready");
        self.pending_submit = Some(self.epoch);
        Ok(SubmitTicket {
            epoch: self.epoch,
            game_id,
            answer,
        })
    }

    /// Applies a verdict.
    ///
    /// On success stores the outcome, reconciles the board and moves to
    /// [`Step::Result`]. On failure stays in [`Step::Playing`] with the
    /// board untouched and a new submit allowed.
    #[instrument(skip(self, ticket, result), fields(game = %P::KIND, epoch = self.epoch))]
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket<P>,
        result: Result<P::Verdict, RemoteError>,
    ) -> Result<(), SessionError> {
        if ticket.epoch != self.epoch
            || self.step != Step::Playing
            || self.game_id.as_ref() != Some(&ticket.game_id)
        {
            warn!(ticket = ticket.epoch, game_id = %ticket.game_id, "Discarding stale verdict");
            return Err(SessionError::Stale);
        }
        self.pending_submit = None;
        let verdict = result.map_err(|e| self.fail(e.into()))?;
        let success = P::succeeded(&verdict);
        P::reconcile(&mut self.board, &verdict);
        self.outcome = Some(verdict);
        self.error = None;
        self.notifier.notify(
            if success {
                NoticeLevel::Success
            } else {
                NoticeLevel::Info
            },
            if success { "Correct!" } else { "Not quite." },
        );
        self.transition(Step::Result, Some(success));
        Ok(())
    }

    /// Gives up on a ticket whose request was never sent or never
    /// answered, allowing a new submit.
    #[instrument(skip(self, ticket), fields(game = %P::KIND, epoch = self.epoch))]
    pub fn cancel_submit(&mut self, ticket: SubmitTicket<P>) {
        if self.pending_submit == Some(ticket.epoch) {
            debug!(game_id = %ticket.game_id, "Submit cancelled");
            self.pending_submit = None;
        }
    }

    /// Sends the answer and applies the verdict.
    pub async fn submit<R>(&mut self, remote: &R) -> Result<(), SessionError>
    where
        R: RemoteSession<P> + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let result = remote
            .submit(&ticket.game_id, &self.player_name, &ticket.answer)
            .await;
        self.finish_submit(ticket, result)
    }

    /// Back to name entry with everything cleared.
    #[instrument(skip(self), fields(game = %P::KIND))]
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.require(Step::Result, "reset")?;
        self.clear_round();
        self.player_name.clear();
        self.config = P::Config::default();
        self.epoch += 1;
        self.transition(Step::Setup, None);
        Ok(())
    }

    /// Same player, same options, new round.
    #[instrument(skip(self), fields(game = %P::KIND))]
    pub fn retry(&mut self) -> Result<(), SessionError> {
        self.require(Step::Result, "retry")?;
        self.clear_round();
        self.epoch += 1;
        self.transition(Step::Configuring, None);
        Ok(())
    }
}
