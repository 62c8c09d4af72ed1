//! Terminal geometry of the board: where each logical cell is drawn and
//! which cell a mouse click lands on.

use crate::grid::Tile;
use crate::position::Position;

pub const TILE_WIDTH: u16 = 8;
pub const TILE_HEIGHT: u16 = 3;

/// Rows above the board reserved for the status lines.
pub const BOARD_TOP: u16 = 3;
pub const BOARD_LEFT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    size: usize,
    left: u16,
    top: u16,
}

impl BoardLayout {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            left: BOARD_LEFT,
            top: BOARD_TOP,
        }
    }

    /// Terminal (column, row) of the top-left corner of a cell.
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.left.saturating_add(span(pos.col, TILE_WIDTH)),
            self.top.saturating_add(span(pos.row, TILE_HEIGHT)),
        )
    }

    /// First terminal row below the board.
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(span(self.size, TILE_HEIGHT))
    }

    pub fn hit_test(&self, column: u16, row: u16) -> Option<Position> {
        if column < self.left || row < self.top {
            return None;
        }
        let pos = Position::new(
            ((row - self.top) / TILE_HEIGHT) as usize,
            ((column - self.left) / TILE_WIDTH) as usize,
        );
        pos.in_bounds(self.size).then_some(pos)
    }
}

/// Terminal extent of `cells` tiles, clamped to the coordinate range.
fn span(cells: usize, extent: u16) -> u16 {
    u16::try_from(cells)
        .unwrap_or(u16::MAX)
        .saturating_mul(extent)
}

/// Caption for a tile. It follows the tile's home cell, the part of the
/// picture the tile carries, not where it currently sits.
pub fn tile_label(tile: &Tile, size: usize) -> String {
    (tile.home.index(size) + 1).to_string()
}
