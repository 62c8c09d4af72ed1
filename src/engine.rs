//! The puzzle engine: owns the grid, the step counter and the session image,
//! and is the only thing that mutates them.

use log::{info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::error::Result;
use crate::grid::{Grid, Tile};
use crate::image::{random_keyword, ImageId, ImageProvider, RandomImageProvider, SessionImage};
use crate::position::Position;
use crate::shuffle::shuffle;

/// Upper bound on reshuffles when a scramble lands back on solved.
const MAX_RESHUFFLES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
}

/// Raised once, on the move that completes the picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinEvent {
    pub steps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Not adjacent to the empty slot, or off the board.
    Ignored,
    /// The clicked tile slid; `empty` is the slot it vacated.
    Moved { empty: Position },
    Solved(WinEvent),
}

pub struct PuzzleEngine<P = RandomImageProvider, R = StdRng> {
    config: GameConfig,
    grid: Grid,
    steps: u32,
    phase: Phase,
    session: SessionImage,
    provider: P,
    rng: R,
}

impl PuzzleEngine<RandomImageProvider, StdRng> {
    /// Engine backed by the random-photo provider, seeded from `config.seed`
    /// when present.
    pub fn from_config(config: GameConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let provider = RandomImageProvider::new(config.image_px);
        Self::new(config, provider, rng)
    }
}

impl<P: ImageProvider, R: Rng> PuzzleEngine<P, R> {
    /// Validate `config` and start a brand-new game of `config.grid_size`.
    pub fn new(config: GameConfig, provider: P, rng: R) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_size)?;
        let size = grid.size();

        let mut engine = Self {
            config,
            grid,
            steps: 0,
            phase: Phase::Playing,
            session: SessionImage::default(),
            provider,
            rng,
        };
        engine.init_game(size, true)?;
        Ok(engine)
    }

    /// Discard the current game and deal a freshly shuffled one.
    ///
    /// The session image is kept unless `is_new_game` is set or none has
    /// been chosen yet.
    pub fn init_game(&mut self, size: usize, is_new_game: bool) -> Result<()> {
        let mut grid = Grid::new(size)?;

        let Self {
            config,
            session,
            provider,
            rng,
            ..
        } = self;
        let image = session
            .resolve(is_new_game, || {
                let keyword = random_keyword(&config.keywords, rng)?;
                Ok(provider.fresh_image(keyword))
            })?
            .clone();

        let moves = self.config.shuffle_moves(size);
        for attempt in 1..=MAX_RESHUFFLES {
            shuffle(&mut grid, moves, &mut self.rng);
            if moves == 0 || !self.config.reshuffle_if_solved || !grid.is_solved() {
                break;
            }
            warn!("shuffle attempt {} ended solved, shuffling again", attempt);
        }

        self.grid = grid;
        self.steps = 0;
        self.phase = Phase::Playing;
        info!(
            "started {}x{} game (new image: {}) with {}",
            size, size, is_new_game, image
        );
        Ok(())
    }

    /// Start over on the same picture.
    pub fn reset_game(&mut self) -> Result<()> {
        self.init_game(self.grid.size(), false)
    }

    /// Start over on a fresh picture.
    pub fn new_game(&mut self) -> Result<()> {
        self.init_game(self.grid.size(), true)
    }

    /// Handle a click on the tile at `pos`.
    ///
    /// Play stays open after a win; later moves are counted but never raise
    /// a second win event.
    pub fn on_tile_clicked(&mut self, pos: Position) -> MoveOutcome {
        match self.grid.try_move(pos) {
            None => {
                trace!("click at {} rejected, empty at {}", pos, self.grid.empty());
                MoveOutcome::Ignored
            }
            Some(empty) => {
                self.steps += 1;
                trace!("moved tile from {}, step {}", pos, self.steps);
                match self.check_win() {
                    Some(win) => MoveOutcome::Solved(win),
                    None => MoveOutcome::Moved { empty },
                }
            }
        }
    }

    /// Edge-triggered win check: yields an event only on the first check
    /// that finds the grid solved after the player has moved.
    pub fn check_win(&mut self) -> Option<WinEvent> {
        if self.phase == Phase::Won || self.steps == 0 || !self.grid.is_solved() {
            return None;
        }
        self.phase = Phase::Won;
        info!("puzzle solved in {} steps", self.steps);
        Some(WinEvent { steps: self.steps })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.grid.tile_at(pos)
    }

    pub fn empty(&self) -> Position {
        self.grid.empty()
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    pub fn image(&self) -> Option<&ImageId> {
        self.session.get()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
