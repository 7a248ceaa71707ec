//! Renderable board: decorated cells in screen order plus connectors.

use super::{
    BoardSize, Connector, ConnectorKind, GridPos, LadderError, Origin, cell_position, render_order,
};
use std::collections::BTreeMap;
use tracing::instrument;

/// One numbered cell with its decorations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellTile {
    /// Cell number, `1..=n²`.
    pub number: u16,
    /// Grid position.
    pub pos: GridPos,
    /// Destination if a snake's head sits here.
    pub snake_to: Option<u16>,
    /// Destination if a ladder's foot sits here.
    pub ladder_to: Option<u16>,
    /// Cell 1.
    pub is_start: bool,
    /// Cell `n²`.
    pub is_finish: bool,
}

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderLayout {
    /// Board size.
    pub size: BoardSize,
    /// Cells in reading order, top row first.
    pub tiles: Vec<CellTile>,
    /// Ladders first, then snakes.
    pub connectors: Vec<Connector>,
}

impl LadderLayout {
    /// Derives the layout from board size and connector maps.
    ///
    /// Fails if any connector endpoint lies off the board.
    #[instrument(skip(snakes, ladders), fields(snakes = snakes.len(), ladders = ladders.len()))]
    pub fn new(
        size: BoardSize,
        snakes: &BTreeMap<u16, u16>,
        ladders: &BTreeMap<u16, u16>,
        origin: Origin,
    ) -> Result<Self, LadderError> {
        let last = size.cells();
        let tiles = render_order(size)
            .into_iter()
            .map(|number| {
                Ok(CellTile {
                    number,
                    pos: cell_position(number, size)?,
                    snake_to: snakes.get(&number).copied(),
                    ladder_to: ladders.get(&number).copied(),
                    is_start: number == 1,
                    is_finish: number == last,
                })
            })
            .collect::<Result<Vec<_>, LadderError>>()?;

        let ladders = ladders
            .iter()
            .map(|(&from, &to)| Connector::between(ConnectorKind::Ladder, from, to, size, origin));
        let snakes = snakes
            .iter()
            .map(|(&from, &to)| Connector::between(ConnectorKind::Snake, from, to, size, origin));
        let connectors = ladders.chain(snakes).collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            size,
            tiles,
            connectors,
        })
    }

    /// Tiles grouped into screen rows, top first.
    pub fn rows(&self) -> impl Iterator<Item = &[CellTile]> {
        self.tiles.chunks(usize::from(self.size.get()))
    }
}
