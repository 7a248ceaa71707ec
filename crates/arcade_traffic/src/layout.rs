//! Road placement on the canvas.

use super::{Node, Position, Road, TrafficError};
use std::str::FromStr;
use tracing::instrument;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 700;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 300;

/// One road ready to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLayout {
    /// Tail junction.
    pub from: Node,
    /// Head junction.
    pub to: Node,
    /// Vehicles per minute.
    pub capacity: u32,
    /// Tail position.
    pub start: Position,
    /// Head position.
    pub end: Position,
    /// Where the capacity label goes.
    pub label: Position,
}

/// All roads and junctions of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphLayout {
    /// Roads in seed order.
    pub edges: Vec<EdgeLayout>,
}

impl GraphLayout {
    /// Places every road. Fails on the first unknown junction.
    #[instrument(skip(roads), fields(roads = roads.len()))]
    pub fn new(roads: &[Road]) -> Result<Self, TrafficError> {
        let edges = roads
            .iter()
            .map(|road| {
                let from = parse(&road.from)?;
                let to = parse(&road.to)?;
                let (start, end) = (from.position(), to.position());
                Ok(EdgeLayout {
                    from,
                    to,
                    capacity: road.capacity,
                    start,
                    end,
                    label: start.midpoint(end),
                })
            })
            .collect::<Result<Vec<_>, TrafficError>>()?;
        Ok(Self { edges })
    }

    /// Sum of capacities leaving the source. An upper bound on the flow.
    pub fn source_capacity(&self) -> u64 {
        self.edges
            .iter()
            .filter(|e| e.from.is_source())
            .map(|e| u64::from(e.capacity))
            .sum()
    }
}

fn parse(label: &str) -> Result<Node, TrafficError> {
    Node::from_str(label).map_err(|_| TrafficError::UnknownNode(label.to_string()))
}
