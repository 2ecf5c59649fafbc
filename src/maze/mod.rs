//! Reference runtime: grid mazes and a simulated robot.
//!
//! This is the controller's outside world. It owns positions and the
//! visited set; the controller only ever sees [`Sensor`] readings.
//!
//! [`Sensor`]: crate::navigation::Sensor

mod grid;
mod robot;

pub use grid::{Maze, Tile};
pub use robot::{Outcome, SimRobot, run_episode};
