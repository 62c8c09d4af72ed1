//! Sliding-tile image puzzle: a picture cut into an N×N grid with one tile
//! missing, scrambled by a random walk of the empty slot and solved by
//! sliding tiles back home.

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod image;
pub mod position;
pub mod shuffle;
pub mod ui;

pub use config::GameConfig;
pub use engine::{MoveOutcome, Phase, PuzzleEngine, WinEvent};
pub use error::{PuzzleError, Result};
pub use grid::{Grid, Tile};
pub use image::{ImageId, ImageProvider, RandomImageProvider, SessionImage};
pub use position::{Direction, Position};
pub use shuffle::{default_move_count, shuffle};
