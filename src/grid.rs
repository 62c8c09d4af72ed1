//! Grid model: tiles, the empty slot and the swap primitive shared by
//! shuffling and player moves.

use std::fmt;

use crate::error::{PuzzleError, Result};
use crate::position::{Direction, Position};

/// One puzzle piece.
///
/// `home` decides which part of the image the tile shows; `current` decides
/// where it is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: usize,
    pub home: Position,
    pub current: Position,
}

impl Tile {
    pub fn is_home(&self) -> bool {
        self.current == self.home
    }
}

/// Largest board the terminal front end can lay out within `u16` coordinates.
pub const MAX_GRID_SIZE: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
    /// Row-major lookup from position to tile id; `None` marks the empty slot.
    board: Vec<Option<usize>>,
    empty: Position,
}

impl Grid {
    /// Build the solved arrangement: one tile per cell except the bottom-right
    /// corner, which starts empty.
    pub fn new(size: usize) -> Result<Self> {
        if !(2..=MAX_GRID_SIZE).contains(&size) {
            return Err(PuzzleError::InvalidGridSize(size));
        }

        let empty = Position::new(size - 1, size - 1);
        let mut tiles = Vec::with_capacity(size * size - 1);
        let mut board = Vec::with_capacity(size * size);

        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                if pos == empty {
                    board.push(None);
                    continue;
                }
                let id = tiles.len();
                tiles.push(Tile {
                    id,
                    home: pos,
                    current: pos,
                });
                board.push(Some(id));
            }
        }

        Ok(Self {
            size,
            tiles,
            board,
            empty,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn empty(&self) -> Position {
        self.empty
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        if !pos.in_bounds(self.size) {
            return None;
        }
        self.board[pos.index(self.size)].map(|id| &self.tiles[id])
    }

    /// Slide the tile in direction `dir` from the empty slot into it.
    /// Returns the new empty position, or `None` if `dir` leaves the grid.
    pub fn slide(&mut self, dir: Direction) -> Option<Position> {
        let from = self.empty.step(dir, self.size)?;
        self.swap_with_empty(from);
        Some(from)
    }

    /// Move the tile at `pos` into the empty slot if the two are orthogonally
    /// adjacent. Anything else leaves the grid untouched.
    pub fn try_move(&mut self, pos: Position) -> Option<Position> {
        if !pos.in_bounds(self.size) || !pos.is_adjacent(self.empty) {
            return None;
        }
        self.swap_with_empty(pos);
        Some(pos)
    }

    fn swap_with_empty(&mut self, from: Position) {
        let from_idx = from.index(self.size);
        let empty_idx = self.empty.index(self.size);

        if let Some(id) = self.board[from_idx] {
            self.tiles[id].current = self.empty;
        }
        self.board.swap(from_idx, empty_idx);
        self.empty = from;
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::is_home)
    }

    /// Inversion-parity test: whether this arrangement can reach the solved one
    /// through legal moves.
    pub fn is_solvable(&self) -> bool {
        let flattened: Vec<usize> = self.board.iter().map(|cell| cell.map_or(0, |id| id + 1)).collect();
        let inversions = count_inversions(&flattened);

        if self.size % 2 == 1 {
            // Odd width: every legal move keeps inversion parity
            inversions % 2 == 0
        } else {
            // Even width: parity flips with each vertical move of the blank
            (inversions + self.empty.row) % 2 == 1
        }
    }
}

fn count_inversions(flattened: &[usize]) -> usize {
    flattened
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flattened[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(self.size) {
            for cell in row {
                match cell {
                    Some(id) => write!(f, "{:2} ", id + 1)?,
                    None => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_solved_for_all_sizes() {
        for size in 2..=8 {
            let grid = Grid::new(size).unwrap();
            assert_eq!(grid.tiles().len(), size * size - 1);
            assert_eq!(grid.empty(), Position::new(size - 1, size - 1));
            assert!(grid.tiles().iter().all(|t| t.current == t.home));
            assert!(grid.is_solved());
            assert!(grid.is_solvable());
        }
    }

    #[test]
    fn test_rejects_degenerate_size() {
        assert!(matches!(Grid::new(0), Err(PuzzleError::InvalidGridSize(0))));
        assert!(matches!(Grid::new(1), Err(PuzzleError::InvalidGridSize(1))));
        assert!(matches!(
            Grid::new(MAX_GRID_SIZE + 1),
            Err(PuzzleError::InvalidGridSize(65))
        ));
        assert!(Grid::new(MAX_GRID_SIZE).is_ok());
    }

    #[test]
    fn test_exactly_one_empty_cell() {
        let grid = Grid::new(4).unwrap();
        let empty_cells: Vec<Position> = (0..4)
            .flat_map(|r| (0..4).map(move |c| Position::new(r, c)))
            .filter(|p| grid.tile_at(*p).is_none())
            .collect();
        assert_eq!(empty_cells, vec![grid.empty()]);
    }

    #[test]
    fn test_non_adjacent_move_is_noop() {
        let mut grid = Grid::new(3).unwrap();
        let before = grid.clone();

        assert_eq!(grid.try_move(Position::new(0, 0)), None);
        assert_eq!(grid.try_move(Position::new(1, 1)), None); // diagonal
        assert_eq!(grid.try_move(Position::new(2, 2)), None); // the empty slot itself
        assert_eq!(grid.try_move(Position::new(5, 2)), None); // off the board
        assert_eq!(grid, before);
    }

    #[test]
    fn test_adjacent_move_swaps_one_tile() {
        let mut grid = Grid::new(3).unwrap();
        let clicked = Position::new(2, 1);
        let moved_id = grid.tile_at(clicked).unwrap().id;

        assert_eq!(grid.try_move(clicked), Some(clicked));
        assert_eq!(grid.empty(), clicked);
        assert_eq!(grid.tiles()[moved_id].current, Position::new(2, 2));
        assert!(grid.tile_at(clicked).is_none());

        let displaced: Vec<&Tile> = grid.tiles().iter().filter(|t| !t.is_home()).collect();
        assert_eq!(displaced.len(), 1);
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_slide_off_edge_is_rejected() {
        let mut grid = Grid::new(3).unwrap();
        assert_eq!(grid.slide(Direction::Down), None);
        assert_eq!(grid.slide(Direction::Right), None);
        assert_eq!(grid.slide(Direction::Up), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_swapped_pair_is_unsolvable() {
        let mut grid = Grid::new(3).unwrap();
        // Swap tiles 1 and 2 by hand: a single transposition flips parity.
        grid.board.swap(0, 1);
        grid.tiles[0].current = Position::new(0, 1);
        grid.tiles[1].current = Position::new(0, 0);
        assert!(!grid.is_solvable());
    }

    #[test]
    fn test_display_marks_empty_slot() {
        let grid = Grid::new(2).unwrap();
        assert_eq!(grid.to_string(), " 1  2 \n 3  . \n");
    }
}
