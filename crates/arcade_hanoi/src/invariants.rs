//! Properties every reachable peg configuration satisfies.
//!
//! Invariants are checked after each applied move in debug builds and
//! can be tested independently.

use super::{Pegs, peg_label};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariant: every stack strictly decreases from bottom to top.
pub struct SortedStacks;

impl Invariant<Pegs> for SortedStacks {
    fn holds(pegs: &Pegs) -> bool {
        pegs.stacks()
            .iter()
            .all(|stack| stack.windows(2).all(|w| w[0] > w[1]))
    }

    fn description() -> &'static str {
        "Each peg is ordered largest (bottom) to smallest (top)"
    }
}

/// Invariant: disks `1..=n` each appear exactly once across all pegs.
pub struct DisksConserved;

impl Invariant<Pegs> for DisksConserved {
    fn holds(pegs: &Pegs) -> bool {
        let mut seen: Vec<u8> = pegs.stacks().iter().flatten().copied().collect();
        seen.sort_unstable();
        seen.iter().enumerate().all(|(i, &disk)| usize::from(disk) == i + 1)
    }

    fn description() -> &'static str {
        "Every disk is on exactly one peg"
    }
}

/// All peg invariants checked together.
pub struct HanoiInvariants;

impl HanoiInvariants {
    /// Returns every violated invariant, or `Ok` when all hold.
    pub fn check_all(pegs: &Pegs) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !SortedStacks::holds(pegs) {
            violations.push(InvariantViolation::new(SortedStacks::description()));
        }
        if !DisksConserved::holds(pegs) {
            violations.push(InvariantViolation::new(DisksConserved::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::warn!(
                pegs = ?pegs.stacks().iter().enumerate().map(|(i, s)| (peg_label(i), s)).collect::<Vec<_>>(),
                count = violations.len(),
                "Peg invariants violated"
            );
            Err(violations)
        }
    }
}
