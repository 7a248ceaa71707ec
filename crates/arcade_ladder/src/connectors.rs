//! Curved connectors for snakes and ladders.

use super::{BoardSize, LadderError, Origin, cell_center};
use tracing::instrument;

/// How far the control point bends away from the straight line, as a
/// fraction of the connector's vertical extent.
pub const CURVE_BEND: f64 = 0.2;

/// Point in normalised board coordinates (`0.0..=1.0` on both axes).
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct Point {
    /// Horizontal fraction.
    pub x: f64,
    /// Vertical fraction.
    pub y: f64,
}

impl Point {
    /// Scales to a `0..=100` viewbox.
    pub fn percent(self) -> (f64, f64) {
        (self.x * 100.0, self.y * 100.0)
    }

    /// Midpoint between two points.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Snake or ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ConnectorKind {
    /// Moves the player down.
    #[strum(to_string = "snake")]
    Snake,
    /// Moves the player up.
    #[strum(to_string = "ladder")]
    Ladder,
}

/// Quadratic curve from one cell centre to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Snake or ladder.
    pub kind: ConnectorKind,
    /// Cell the connector starts on.
    pub from: u16,
    /// Cell the connector lands on.
    pub to: u16,
    /// Centre of `from`.
    pub start: Point,
    /// Bezier control point.
    pub control: Point,
    /// Centre of `to`.
    pub end: Point,
}

impl Connector {
    /// Builds the connector between two cells.
    ///
    /// The control point sits at the chord's midpoint, pushed sideways in
    /// proportion to the vertical distance so long connectors curve more.
    #[instrument]
    pub fn between(
        kind: ConnectorKind,
        from: u16,
        to: u16,
        size: BoardSize,
        origin: Origin,
    ) -> Result<Self, LadderError> {
        let start = cell_center(from, size, origin)?;
        let end = cell_center(to, size, origin)?;
        let mid = start.midpoint(end);
        let control = Point::new(mid.x + (end.y - start.y) * CURVE_BEND, mid.y);
        if (kind == ConnectorKind::Snake && to >= from) || (kind == ConnectorKind::Ladder && to <= from)
        {
            tracing::warn!(%kind, from, to, "Connector runs against its direction");
        }
        Ok(Self {
            kind,
            from,
            to,
            start,
            control,
            end,
        })
    }

    /// SVG path data in a `0 0 100 100` viewbox.
    pub fn svg_path(&self) -> String {
        let (sx, sy) = self.start.percent();
        let (cx, cy) = self.control.percent();
        let (ex, ey) = self.end.percent();
        format!("M {sx} {sy} Q {cx} {cy} {ex} {ey}")
    }
}
