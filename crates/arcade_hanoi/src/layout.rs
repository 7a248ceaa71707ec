//! Disk geometry for drawing the pegs.

use super::{HanoiBoard, peg_label};
use serde::Serialize;
use tracing::instrument;

/// Height of one disk, in pixels.
pub const DISK_HEIGHT: u32 = 20;

/// Vertical gap between stacked disks, in pixels.
pub const DISK_GAP: u32 = 2;

const BASE_WIDTH: u32 = 30;
const WIDTH_PER_SIZE: u32 = 15;
const BASE_PADDING: u32 = 10;

/// One disk as drawn on its peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiskRect {
    /// Disk size (1 = smallest).
    pub size: u8,
    /// Width in pixels, centred on the pole.
    pub width: u32,
    /// Distance from the peg base to the disk's bottom edge, in pixels.
    pub bottom: u32,
}

impl DiskRect {
    fn at(size: u8, level: usize) -> Self {
        let level = u32::try_from(level).unwrap_or(u32::MAX);
        Self {
            size,
            width: BASE_WIDTH + u32::from(size) * WIDTH_PER_SIZE,
            bottom: BASE_PADDING + level.saturating_mul(DISK_HEIGHT + DISK_GAP),
        }
    }
}

/// A peg with its disks, bottom first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PegLayout {
    /// Letter under the peg.
    pub label: char,
    /// Whether the peg is the pending move source.
    pub selected: bool,
    /// Whether this is the peg the stack must end on.
    pub target: bool,
    /// Disks, bottom first.
    pub disks: Vec<DiskRect>,
}

/// Drawable view of a whole Hanoi board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackLayout {
    /// Pegs left to right.
    pub pegs: Vec<PegLayout>,
    /// Moves made so far.
    pub move_count: usize,
}

impl StackLayout {
    /// Lays out every peg of `board`.
    #[instrument(skip(board))]
    pub fn of(board: &HanoiBoard) -> Self {
        let target = board.pegs().target();
        let pegs = board
            .pegs()
            .stacks()
            .iter()
            .enumerate()
            .map(|(idx, stack)| PegLayout {
                label: peg_label(idx),
                selected: board.selected() == Some(idx),
                target: idx == target,
                disks: stack
                    .iter()
                    .enumerate()
                    .map(|(level, &size)| DiskRect::at(size, level))
                    .collect(),
            })
            .collect();
        Self {
            pegs,
            move_count: board.move_count(),
        }
    }

    /// Width of the widest disk, useful for sizing the peg columns.
    pub fn max_disk_width(&self) -> u32 {
        self.pegs
            .iter()
            .flat_map(|p| p.disks.iter().map(|d| d.width))
            .max()
            .unwrap_or(BASE_WIDTH)
    }
}
