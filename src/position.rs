use std::fmt;

/// A cell in the N×N grid, addressed as (row, col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index of this position in a grid of the given size.
    pub fn index(&self, size: usize) -> usize {
        self.row * size + self.col
    }

    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    pub fn manhattan_distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when `other` shares an edge with this position.
    pub fn is_adjacent(&self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The neighboring position in `dir`, if it stays inside the grid.
    pub fn step(&self, dir: Direction, size: usize) -> Option<Position> {
        let (dr, dc) = dir.as_offset();

        let new_row = self.row as isize + dr;
        let new_col = self.col as isize + dc;

        if new_row >= 0 && new_row < size as isize && new_col >= 0 && new_col < size as isize {
            Some(Position::new(new_row as usize, new_col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction in which the empty slot travels during a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Directions from `from` that stay within a grid of `size`.
    pub fn valid_from(from: Position, size: usize) -> Vec<Direction> {
        Self::ALL
            .into_iter()
            .filter(|dir| from.step(*dir, size).is_some())
            .collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3), None);
        assert_eq!(corner.step(Direction::Left, 3), None);
        assert_eq!(corner.step(Direction::Down, 3), Some(Position::new(1, 0)));
        assert_eq!(corner.step(Direction::Right, 3), Some(Position::new(0, 1)));
    }

    #[test]
    fn test_valid_directions_by_location() {
        assert_eq!(Direction::valid_from(Position::new(2, 2), 3).len(), 2);
        assert_eq!(Direction::valid_from(Position::new(0, 1), 3).len(), 3);
        assert_eq!(Direction::valid_from(Position::new(1, 1), 3).len(), 4);
    }

    #[test]
    fn test_adjacency_is_orthogonal_only() {
        let empty = Position::new(2, 2);
        assert!(Position::new(1, 2).is_adjacent(empty));
        assert!(Position::new(2, 1).is_adjacent(empty));
        assert!(!Position::new(1, 1).is_adjacent(empty)); // diagonal
        assert!(!Position::new(0, 0).is_adjacent(empty));
        assert!(!empty.is_adjacent(empty));
    }

    #[test]
    fn test_opposite_round_trips_offset() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.as_offset();
            let (or, oc) = dir.opposite().as_offset();
            assert_eq!((dr + or, dc + oc), (0, 0), "{}", dir);
        }
    }
}
