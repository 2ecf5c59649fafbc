use crate::maze::{SimRobot, Tile};
use crate::navigation::Sensor;
use rayon::prelude::*;

pub const WALL: char = '#';
pub const VISITED: char = '.';
pub const UNVISITED: char = ' ';
pub const EXIT: char = 'E';
pub const START: char = 'S';

/// Rasterises the maze around the robot, cropped to `rows` x `cols`.
#[must_use]
pub fn compute_maze_grid(robot: &SimRobot, rows: usize, cols: usize) -> Vec<String> {
    let maze = robot.maze();
    let rows = rows.min(maze.height());
    let cols = cols.min(maze.width());
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let position = robot.position();
    let arrow = robot.heading().arrow();

    // Use rayon to compute rows in parallel
    (0..rows)
        .into_par_iter()
        .map(|y| {
            (0..cols)
                .map(|x| {
                    if (x, y) == position {
                        arrow
                    } else if (x, y) == maze.exit() {
                        EXIT
                    } else if (x, y) == maze.start() {
                        START
                    } else if maze.tile(x, y) == Tile::Wall {
                        WALL
                    } else if robot.is_visited(x, y) {
                        VISITED
                    } else {
                        UNVISITED
                    }
                })
                .collect::<String>()
        })
        .collect()
}
