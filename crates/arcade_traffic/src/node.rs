//! Junctions and their fixed canvas positions.

use strum::IntoEnumIterator;

/// Pixel position on the canvas, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct Position {
    /// Horizontal pixels.
    pub x: u32,
    /// Vertical pixels.
    pub y: u32,
}

impl Position {
    /// Midpoint, rounded down.
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }
}

/// Junction in the road network.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Node {
    /// Source.
    A,
    /// First layer, top.
    B,
    /// First layer, middle.
    C,
    /// First layer, bottom.
    D,
    /// Second layer, top.
    E,
    /// Second layer, bottom.
    F,
    /// Third layer, top.
    G,
    /// Third layer, bottom.
    H,
    /// Sink.
    T,
}

impl Node {
    /// Where the junction is drawn.
    pub fn position(self) -> Position {
        let (x, y) = match self {
            Node::A => (50, 150),
            Node::B => (200, 50),
            Node::C => (200, 150),
            Node::D => (200, 250),
            Node::E => (350, 100),
            Node::F => (350, 200),
            Node::G => (500, 100),
            Node::H => (500, 200),
            Node::T => (650, 150),
        };
        Position::new(x, y)
    }

    /// Flow enters here.
    pub fn is_source(self) -> bool {
        self == Node::A
    }

    /// Flow leaves here.
    pub fn is_sink(self) -> bool {
        self == Node::T
    }

    /// All junctions with positions.
    pub fn placed() -> Vec<(Node, Position)> {
        Node::iter().map(|n| (n, n.position())).collect()
    }
}
