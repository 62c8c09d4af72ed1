//! Random-walk shuffle.
//!
//! The empty slot takes `move_count` random legal steps away from the solved
//! arrangement, so every result can be walked back to solved.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::position::Direction;

/// Steps per cell used when no explicit move count is configured.
pub const DEFAULT_SHUFFLE_FACTOR: usize = 10;

pub fn default_move_count(size: usize) -> usize {
    size * size * DEFAULT_SHUFFLE_FACTOR
}

/// Scramble `grid` in place and return the directions the empty slot took.
///
/// Reversing the list and taking each `opposite()` restores the starting
/// arrangement.
pub fn shuffle<R: Rng + ?Sized>(grid: &mut Grid, move_count: usize, rng: &mut R) -> Vec<Direction> {
    let mut path = Vec::with_capacity(move_count);

    for _ in 0..move_count {
        let valid = Direction::valid_from(grid.empty(), grid.size());
        // Every cell of a grid with size >= 2 has at least two neighbors
        let Some(&dir) = valid.choose(rng) else {
            break;
        };
        if grid.slide(dir).is_some() {
            path.push(dir);
        }
    }

    debug!(
        "shuffled {}x{} grid with {} moves, empty at {}:\n{}",
        grid.size(),
        grid.size(),
        path.len(),
        grid.empty(),
        grid
    );
    path
}
