//! Game configuration, loaded from JSON.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};
use crate::grid::MAX_GRID_SIZE;
use crate::image::{DEFAULT_IMAGE_PX, DEFAULT_KEYWORDS};
use crate::shuffle::DEFAULT_SHUFFLE_FACTOR;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "SLIDE_PUZZLE_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles per row and column (2 to 64)
    pub grid_size: usize,

    /// Shuffle moves per cell; total moves = grid_size² × factor
    pub shuffle_factor: usize,

    /// Edge length requested from the image provider
    pub image_px: u32,

    /// Category words a new game's image is drawn from
    pub keywords: Vec<String>,

    /// Shuffle again if a non-empty shuffle lands back on solved
    pub reshuffle_if_solved: bool,

    /// Random seed for reproducible games (None = entropy)
    pub seed: Option<u64>,

    /// Where log output goes while the terminal UI owns the screen
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 3,
            shuffle_factor: DEFAULT_SHUFFLE_FACTOR,
            image_px: DEFAULT_IMAGE_PX,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            reshuffle_if_solved: true,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| PuzzleError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load from `$SLIDE_PUZZLE_CONFIG` if set, otherwise use defaults.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                info!("loading config from {}", path.display());
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(PuzzleError::InvalidGridSize(self.grid_size));
        }
        if self.keywords.is_empty() {
            return Err(PuzzleError::EmptyKeywords);
        }
        Ok(())
    }

    /// Single-line JSON form, as logged at startup.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn shuffle_moves(&self, size: usize) -> usize {
        size * size * self.shuffle_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 3);
        assert_eq!(config.shuffle_moves(3), 90);
        assert_eq!(config.keywords.len(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "grid_size": 4, "seed": 9 }"#).unwrap();
        assert_eq!(config.grid_size, 4);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.shuffle_factor, 10);
        assert!(config.reshuffle_if_solved);
    }

    #[test]
    fn test_logged_form_loads_back() {
        let config = GameConfig {
            grid_size: 5,
            seed: Some(123),
            log_file: Some(PathBuf::from("puzzle.log")),
            ..Default::default()
        };
        let text = config.to_json().unwrap();
        assert!(text.contains(r#""grid_size":5"#));
        assert_eq!(GameConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_small_grid() {
        let err = GameConfig::from_json(r#"{ "grid_size": 1 }"#).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidGridSize(1)));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let err = GameConfig::from_json(r#"{ "grid_size": 9000 }"#).unwrap_err();
        assert!(matches!(err, PuzzleError::InvalidGridSize(9000)));
    }

    #[test]
    fn test_rejects_empty_keywords() {
        let err = GameConfig::from_json(r#"{ "keywords": [] }"#).unwrap_err();
        assert!(matches!(err, PuzzleError::EmptyKeywords));
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json("{ grid_size: ").unwrap_err();
        assert!(matches!(err, PuzzleError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load(Path::new("/nonexistent/slide-puzzle.json")).unwrap_err();
        assert!(matches!(err, PuzzleError::ConfigRead { .. }));
    }
}
