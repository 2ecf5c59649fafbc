//! Configuration loading.
//!
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration. CLI flags are applied on top by the binary.

use crate::error::{NavError, Result};
use crate::params::{MAX_STEPS, MAZE_HEIGHT, MAZE_WIDTH, MEMORY_CAPACITY, MIN_MAZE_SIDE, RUNS, TICK_MS};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub maze: MazeConfig,
    #[serde(default)]
    pub controller: ControllerConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

/// Reference maze generation
#[derive(Clone, Debug, Deserialize)]
pub struct MazeConfig {
    /// Grid width in tiles, walls included (rounded up to odd)
    #[serde(default = "default_width")]
    pub width: usize,

    /// Grid height in tiles, walls included (rounded up to odd)
    #[serde(default = "default_height")]
    pub height: usize,

    /// RNG seed for both the maze and the controller; random if unset
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Controller settings
#[derive(Clone, Debug, Deserialize)]
pub struct ControllerConfig {
    /// Maximum number of open junctions remembered at once
    #[serde(default = "default_memory_capacity")]
    pub memory_capacity: usize,
}

/// Episode driving
#[derive(Clone, Debug, Deserialize)]
pub struct RuntimeConfig {
    /// Delay between ticks in the terminal viewer (milliseconds)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Step budget per run
    #[serde(default = "default_max_steps")]
    pub max_steps: u64,

    /// Number of runs in headless mode
    #[serde(default = "default_runs")]
    pub runs: u32,
}

fn default_width() -> usize {
    MAZE_WIDTH
}
fn default_height() -> usize {
    MAZE_HEIGHT
}
fn default_memory_capacity() -> usize {
    MEMORY_CAPACITY
}
fn default_tick_ms() -> u64 {
    TICK_MS
}
fn default_max_steps() -> u64 {
    MAX_STEPS
}
fn default_runs() -> u32 {
    RUNS
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            seed: None,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            memory_capacity: default_memory_capacity(),
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            max_steps: default_max_steps(),
            runs: default_runs(),
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ExplorerConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the runtime cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.maze.width < MIN_MAZE_SIDE || self.maze.height < MIN_MAZE_SIDE {
            return Err(NavError::Config(format!(
                "maze must be at least {MIN_MAZE_SIDE}x{MIN_MAZE_SIDE}, got {}x{}",
                self.maze.width, self.maze.height
            )));
        }
        if self.controller.memory_capacity == 0 {
            return Err(NavError::Config("memory_capacity must be positive".into()));
        }
        if self.runtime.max_steps == 0 {
            return Err(NavError::Config("max_steps must be positive".into()));
        }
        Ok(())
    }
}
