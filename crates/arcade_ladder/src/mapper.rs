//! Cell number ↔ grid position ↔ board coordinates.

use super::{BoardSize, LadderError, Point};
use tracing::instrument;

/// Grid coordinates of a cell. `row` counts from the bottom, `col` from
/// the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Row from the bottom, 0-indexed.
    pub row: u8,
    /// Column from the left, 0-indexed.
    pub col: u8,
}

/// Where the renderer puts `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Origin {
    /// Screen/SVG convention: y grows downward.
    #[default]
    TopLeft,
    /// Mathematical convention: y grows upward.
    BottomLeft,
}

/// Maps cell `k` (1-indexed) to its grid position.
///
/// Even rows run left to right, odd rows right to left.
#[instrument]
pub fn cell_position(cell: u16, size: BoardSize) -> Result<GridPos, LadderError> {
    let n = u16::from(size.get());
    if cell == 0 || cell > size.cells() {
        return Err(LadderError::NoSuchCell {
            cell,
            size: size.get(),
        });
    }
    let row = (cell - 1) / n;
    let col_in_row = (cell - 1) % n;
    let col = if row % 2 == 0 {
        col_in_row
    } else {
        n - 1 - col_in_row
    };
    // Both are < n <= 12.
    Ok(GridPos {
        row: row as u8,
        col: col as u8,
    })
}

/// Inverse of [`cell_position`].
#[instrument]
pub fn cell_at(pos: GridPos, size: BoardSize) -> Result<u16, LadderError> {
    let n = size.get();
    if pos.row >= n || pos.col >= n {
        return Err(LadderError::OffGrid {
            row: pos.row,
            col: pos.col,
            size: n,
        });
    }
    let col_in_row = if pos.row % 2 == 0 {
        pos.col
    } else {
        n - 1 - pos.col
    };
    Ok(u16::from(pos.row) * u16::from(n) + u16::from(col_in_row) + 1)
}

/// Centre of cell `k` as a fraction of board width and height.
#[instrument]
pub fn cell_center(cell: u16, size: BoardSize, origin: Origin) -> Result<Point, LadderError> {
    let pos = cell_position(cell, size)?;
    let n = f64::from(size.get());
    let x = (f64::from(pos.col) + 0.5) / n;
    let up = (f64::from(pos.row) + 0.5) / n;
    let y = match origin {
        Origin::TopLeft => 1.0 - up,
        Origin::BottomLeft => up,
    };
    Ok(Point::new(x, y))
}

/// Cell numbers in screen reading order: top row first, each row left to
/// right.
#[instrument]
pub fn render_order(size: BoardSize) -> Vec<u16> {
    let n = size.get();
    (0..n)
        .rev()
        .flat_map(|row| (0..n).map(move |col| GridPos { row, col }))
        .filter_map(|pos| cell_at(pos, size).ok())
        .collect()
}
