use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring or presenting a puzzle.
///
/// Rejected moves are not errors; see [`crate::MoveOutcome::Ignored`].
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("grid size must be between 2 and 64, got {0}")]
    InvalidGridSize(usize),

    #[error("image keyword vocabulary is empty")]
    EmptyKeywords,

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
