//! Default parameters.

/// Junction stack capacity. Running out is a configuration error.
pub const MEMORY_CAPACITY: usize = 10_000;

pub const MAZE_WIDTH: usize = 31;
pub const MAZE_HEIGHT: usize = 21; // Fits a default 80x24 terminal with the HUD
pub const MIN_MAZE_SIDE: usize = 5;

pub const TICK_MS: u64 = 40;
pub const MAX_STEPS: u64 = 100_000;
pub const RUNS: u32 = 1;
