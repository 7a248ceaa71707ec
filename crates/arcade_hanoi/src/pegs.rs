//! Peg stacks and the legality rule for moves.

use super::{DisksConserved, HanoiError, HanoiInvariants, Invariant, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Letter shown under a peg: 0 → `A`, 1 → `B`, ...
pub fn peg_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map(char::from)
        .unwrap_or('?')
}

/// Supported board configurations.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum PegCount {
    /// Classic three-peg puzzle.
    #[default]
    #[strum(to_string = "3 Pegs (Standard)")]
    Three,
    /// Four-peg (Reve's puzzle) variant.
    #[strum(to_string = "4 Pegs (Advanced)")]
    Four,
}

impl PegCount {
    /// Number of pegs.
    pub fn get(self) -> u8 {
        match self {
            Self::Three => 3,
            Self::Four => 4,
        }
    }
}

impl TryFrom<u8> for PegCount {
    type Error = HanoiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(Self::Three),
            4 => Ok(Self::Four),
            other => Err(HanoiError::UnsupportedPegCount(other)),
        }
    }
}

/// Ordered peg stacks. Each stack lists disk sizes bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Pegs {
    stacks: Vec<Vec<u8>>,
}

impl Default for Pegs {
    fn default() -> Self {
        Self {
            stacks: vec![Vec::new(); usize::from(PegCount::default().get())],
        }
    }
}

impl TryFrom<Vec<Vec<u8>>> for Pegs {
    type Error = HanoiError;

    fn try_from(stacks: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Self::from_stacks(stacks)
    }
}

impl From<Pegs> for Vec<Vec<u8>> {
    fn from(pegs: Pegs) -> Self {
        pegs.stacks
    }
}

impl Pegs {
    /// Initial position: every disk on peg A, largest at the bottom.
    #[instrument]
    pub fn new(count: PegCount, num_disks: u8) -> Self {
        let mut stacks = vec![Vec::new(); usize::from(count.get())];
        stacks[0] = (1..=num_disks).rev().collect();
        Self { stacks }
    }

    /// Builds pegs from explicit stacks.
    ///
    /// Rejects unordered stacks and any set of disks other than
    /// `1..=n` each placed once.
    #[instrument]
    pub fn from_stacks(stacks: Vec<Vec<u8>>) -> Result<Self, HanoiError> {
        let count = u8::try_from(stacks.len()).unwrap_or(u8::MAX);
        PegCount::try_from(count)?;
        for (idx, stack) in stacks.iter().enumerate() {
            if stack.windows(2).any(|w| w[0] <= w[1]) {
                return Err(HanoiError::Unsorted(peg_label(idx)));
            }
        }
        let pegs = Self { stacks };
        if !DisksConserved::holds(&pegs) {
            warn!(stacks = ?pegs.stacks, "Disks missing or repeated");
            return Err(HanoiError::DisksNotConserved);
        }
        Ok(pegs)
    }

    #[cfg(test)]
    pub(crate) fn unchecked(stacks: Vec<Vec<u8>>) -> Self {
        Self { stacks }
    }

    /// All stacks, bottom to top.
    pub fn stacks(&self) -> &[Vec<u8>] {
        &self.stacks
    }

    /// Number of pegs.
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    /// Whether there are no pegs at all.
    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Total number of disks on the board.
    pub fn num_disks(&self) -> usize {
        self.stacks.iter().map(Vec::len).sum()
    }

    /// Stack on peg `index`, bottom to top.
    pub fn peg(&self, index: usize) -> Result<&[u8], HanoiError> {
        self.stacks
            .get(index)
            .map(Vec::as_slice)
            .ok_or(HanoiError::NoSuchPeg(index))
    }

    /// Smallest disk on peg `index`, if any.
    pub fn top(&self, index: usize) -> Result<Option<u8>, HanoiError> {
        Ok(self.peg(index)?.last().copied())
    }

    /// Index of the peg every disk must end on.
    pub fn target(&self) -> usize {
        self.stacks.len().saturating_sub(1)
    }

    /// Whether every disk sits on the target peg.
    pub fn is_solved(&self) -> bool {
        self.stacks
            .iter()
            .take(self.target())
            .all(Vec::is_empty)
    }

    /// Checks a move without applying it; returns the disk that would move.
    #[instrument(skip(self))]
    pub fn check_move(&self, from: usize, to: usize) -> Result<u8, HanoiError> {
        let source_top = self.top(from)?;
        let dest_top = self.top(to)?;
        if from == to {
            return Err(HanoiError::SamePeg(peg_label(from)));
        }
        let disk = source_top.ok_or(HanoiError::EmptyPeg(peg_label(from)))?;
        match dest_top {
            Some(top) if top < disk => Err(HanoiError::LargerOnSmaller { disk, top }),
            _ => Ok(disk),
        }
    }

    /// Moves the top disk of `from` onto `to`.
    ///
    /// An illegal move leaves every stack unchanged.
    #[instrument(skip(self))]
    pub fn apply(&mut self, from: usize, to: usize) -> Result<Move, HanoiError> {
        let disk = self.check_move(from, to).inspect_err(|e| {
            warn!(error = %e, "Rejected move");
        })?;

        self.stacks[from].pop();
        self.stacks[to].push(disk);

        debug_assert!(
            HanoiInvariants::check_all(self).is_ok(),
            "Peg invariants violated"
        );

        let mv = Move::new(from, to, disk);
        debug!(%mv, "Moved disk");
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position() {
        let pegs = Pegs::new(PegCount::Three, 3);
        assert_eq!(pegs.stacks(), &[vec![3, 2, 1], vec![], vec![]]);
        assert_eq!(pegs.target(), 2);
        assert!(!pegs.is_solved());
    }

    #[test]
    fn test_four_pegs() {
        let pegs = Pegs::new(PegCount::Four, 5);
        assert_eq!(pegs.len(), 4);
        assert_eq!(pegs.peg(0).unwrap(), &[5, 4, 3, 2, 1]);
        assert_eq!(pegs.target(), 3);
    }

    #[test]
    fn test_smaller_onto_larger_is_legal() {
        let mut pegs = Pegs::new(PegCount::Three, 3);
        pegs.apply(0, 2).unwrap();
        let mv = pegs.apply(0, 1).unwrap();
        assert_eq!(mv.disk, 2);
        pegs.apply(2, 1).unwrap();
        assert_eq!(pegs.stacks(), &[vec![3], vec![2, 1], vec![]]);
    }

    #[test]
    fn test_larger_onto_smaller_rejected() {
        let mut pegs = Pegs::new(PegCount::Three, 3);
        pegs.apply(0, 2).unwrap();
        let before = pegs.clone();
        assert_eq!(
            pegs.apply(0, 2),
            Err(HanoiError::LargerOnSmaller { disk: 2, top: 1 })
        );
        assert_eq!(pegs, before);
    }

    #[test]
    fn test_empty_source_rejected() {
        let mut pegs = Pegs::new(PegCount::Three, 3);
        assert_eq!(pegs.apply(1, 2), Err(HanoiError::EmptyPeg('B')));
    }

    #[test]
    fn test_unknown_peg_rejected() {
        let mut pegs = Pegs::new(PegCount::Three, 3);
        assert_eq!(pegs.apply(0, 5), Err(HanoiError::NoSuchPeg(5)));
    }

    #[test]
    fn test_from_stacks_rejects_unsorted() {
        assert_eq!(
            Pegs::from_stacks(vec![vec![1, 2], vec![], vec![]]),
            Err(HanoiError::Unsorted('A'))
        );
        assert_eq!(
            Pegs::from_stacks(vec![vec![], vec![]]),
            Err(HanoiError::UnsupportedPegCount(2))
        );
    }

    #[test]
    fn test_from_stacks_rejects_missing_disk() {
        assert_eq!(
            Pegs::from_stacks(vec![vec![3, 1], vec![], vec![]]),
            Err(HanoiError::DisksNotConserved)
        );
        assert_eq!(
            Pegs::from_stacks(vec![vec![2, 1], vec![1], vec![]]),
            Err(HanoiError::DisksNotConserved)
        );
    }

    #[test]
    fn test_moves_on_rebuilt_pegs() {
        let mut pegs = Pegs::from_stacks(vec![vec![3, 1], vec![2], vec![]]).unwrap();
        assert_eq!(pegs.apply(0, 1).unwrap().disk, 1);
        assert_eq!(pegs.stacks(), &[vec![3], vec![2, 1], vec![]]);
    }

    #[test]
    fn test_deserialize_validates() {
        let pegs: Pegs = serde_json::from_str("[[2, 1], [], []]").unwrap();
        assert_eq!(pegs.num_disks(), 2);
        assert!(serde_json::from_str::<Pegs>("[[3, 1], [], []]").is_err());
    }

    #[test]
    fn test_solved_when_all_on_target() {
        let pegs = Pegs::from_stacks(vec![vec![], vec![], vec![2, 1]]).unwrap();
        assert!(pegs.is_solved());
    }

    #[test]
    fn test_peg_count_parsing() {
        assert_eq!(PegCount::try_from(4), Ok(PegCount::Four));
        assert_eq!(PegCount::try_from(5), Err(HanoiError::UnsupportedPegCount(5)));
        assert_eq!(PegCount::Three.to_string(), "3 Pegs (Standard)");
    }
}
