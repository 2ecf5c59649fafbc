//! Error types for the maze explorer.

use crate::navigation::Relative;
use thiserror::Error;

/// Maze explorer error type.
#[derive(Error, Debug)]
pub enum NavError {
    /// The runtime did not report one of the four relative directions.
    #[error("invalid snapshot: no reading for {missing:?}")]
    InvalidSnapshot { missing: Relative },

    /// Every direction is a wall. A well-formed maze never produces this.
    #[error("no non-wall direction around the robot (corrupt maze or sensing fault)")]
    NoNonWallDirection,

    #[error("junction memory exhausted (capacity {capacity})")]
    MemoryExhausted { capacity: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("maze error: {0}")]
    Maze(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
