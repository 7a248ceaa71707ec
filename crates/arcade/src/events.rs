//! Step transition events and the confetti trigger.

use super::{GameKind, Step};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::{debug, instrument};

/// A session moved between steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Game the session plays.
    pub game: GameKind,
    /// Step left.
    pub from: Step,
    /// Step entered.
    pub to: Step,
    /// Verdict outcome, set only on entering [`Step::Result`].
    pub success: Option<bool>,
}

impl Transition {
    /// Entered the result screen with a winning verdict.
    pub fn is_win(&self) -> bool {
        self.to == Step::Result && self.success == Some(true)
    }
}

/// Receives every transition of the sessions it subscribes to.
pub trait TransitionListener: Send + Sync {
    /// Called after the session has changed step.
    fn on_transition(&self, event: &Transition);
}

/// One-shot celebration fired by winning transitions.
///
/// Holds no session state. Once fired it stays active until the
/// animation reports completion; firing again meanwhile does nothing.
#[derive(Debug, Default)]
pub struct ConfettiTrigger {
    active: AtomicBool,
    bursts: AtomicU64,
}

impl ConfettiTrigger {
    /// Particles per burst.
    pub const PARTICLES: usize = 150;

    /// Starts a burst. Returns `false` if one is already running.
    #[instrument(skip(self))]
    pub fn fire(&self) -> bool {
        let started = self
            .active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if started {
            self.bursts.fetch_add(1, Ordering::Relaxed);
            debug!(particles = Self::PARTICLES, "Confetti");
        }
        started
    }

    /// Marks the running burst finished so the next win can fire.
    pub fn complete(&self) {
        self.active.store(false, Ordering::Release);
    }

    /// Whether a burst is running.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Bursts fired so far.
    pub fn bursts(&self) -> u64 {
        self.bursts.load(Ordering::Relaxed)
    }
}

impl TransitionListener for ConfettiTrigger {
    fn on_transition(&self, event: &Transition) {
        if event.is_win() {
            self.fire();
        }
    }
}
