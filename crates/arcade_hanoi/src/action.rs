//! Move records.

use super::peg_label;
use serde::{Deserialize, Serialize};

/// A disk moved from one peg to another.
///
/// Rendered as `"A -> C"`, which is also the form sent in the move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source peg index.
    pub from: usize,
    /// Destination peg index.
    pub to: usize,
    /// Size of the disk that moved.
    pub disk: u8,
}

impl Move {
    /// Creates a move record.
    pub fn new(from: usize, to: usize, disk: u8) -> Self {
        Self { from, to, disk }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", peg_label(self.from), peg_label(self.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(0, 2, 1).to_string(), "A -> C");
        assert_eq!(Move::new(3, 1, 2).to_string(), "D -> B");
    }
}
