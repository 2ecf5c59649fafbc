//! Simulated robot and the per-tick episode loop.

use super::grid::Maze;
use crate::error::Result;
use crate::navigation::{CellState, Chooser, Explorer, Heading, Move, Relative, Sensor};
use tracing::{info, warn};

/// Heading every run starts with.
const START_HEADING: Heading = Heading::East;

/// A robot moving through a [`Maze`] one tile per tick.
#[derive(Debug, Clone)]
pub struct SimRobot {
    maze: Maze,
    position: (usize, usize),
    heading: Heading,
    visited: Vec<bool>,
    run: u32,
    steps: u64,
}

impl SimRobot {
    /// Places a robot on the maze start for run zero.
    #[must_use]
    pub fn new(maze: Maze) -> Self {
        let mut robot = Self {
            visited: vec![false; maze.width() * maze.height()],
            position: maze.start(),
            heading: START_HEADING,
            maze,
            run: 0,
            steps: 0,
        };
        robot.mark_visited(robot.position);
        robot
    }

    /// Returns the robot to the start and begins the next run.
    pub fn new_run(&mut self) {
        self.position = self.maze.start();
        self.heading = START_HEADING;
        self.visited.fill(false);
        self.mark_visited(self.position);
        self.run += 1;
        self.steps = 0;
    }

    /// Turns as instructed and advances one tile.
    ///
    /// Returns `false` if the tile ahead is a wall; the robot keeps its new
    /// heading but does not move.
    pub fn apply(&mut self, chosen: Move) -> bool {
        self.heading = chosen.heading(self.heading);
        match self.maze.neighbour(self.position, self.heading) {
            Some((x, y)) if self.maze.is_open(x, y) => {
                self.position = (x, y);
                self.mark_visited(self.position);
                self.steps += 1;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn at_exit(&self) -> bool {
        self.position == self.maze.exit()
    }

    #[must_use]
    pub const fn maze(&self) -> &Maze {
        &self.maze
    }

    #[must_use]
    pub const fn position(&self) -> (usize, usize) {
        self.position
    }

    /// Tiles moved in the current run.
    #[must_use]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    #[must_use]
    pub fn is_visited(&self, x: usize, y: usize) -> bool {
        x < self.maze.width() && y < self.maze.height() && self.visited[y * self.maze.width() + x]
    }

    fn mark_visited(&mut self, (x, y): (usize, usize)) {
        let width = self.maze.width();
        self.visited[y * width + x] = true;
    }
}

impl Sensor for SimRobot {
    fn look(&self, direction: Relative) -> CellState {
        let Some((x, y)) = self.maze.neighbour(self.position, self.heading.turn(direction)) else {
            return CellState::Wall;
        };
        if !self.maze.is_open(x, y) {
            CellState::Wall
        } else if self.is_visited(x, y) {
            CellState::Visited
        } else if (x, y) == self.maze.exit() {
            CellState::Exit
        } else {
            CellState::Passage
        }
    }

    fn heading(&self) -> Heading {
        self.heading
    }

    fn run_index(&self) -> u32 {
        self.run
    }
}

/// Summary of one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub reached_exit: bool,
    /// Ticks taken
    pub steps: u64,
    /// Deepest junction stack seen during the run
    pub max_depth: usize,
    /// Moves that ran into a wall
    pub collisions: u64,
}

/// Drives the robot until it reaches the exit or `max_steps` ticks pass.
pub fn run_episode<C: Chooser + ?Sized>(
    robot: &mut SimRobot,
    explorer: &mut Explorer,
    chooser: &mut C,
    max_steps: u64,
) -> Result<Outcome> {
    let mut outcome = Outcome {
        reached_exit: robot.at_exit(),
        steps: 0,
        max_depth: 0,
        collisions: 0,
    };

    while !outcome.reached_exit && outcome.steps < max_steps {
        let chosen = explorer.control(&*robot, chooser)?;
        if !robot.apply(chosen) {
            warn!(?chosen, position = ?robot.position(), "robot ran into a wall");
            outcome.collisions += 1;
        }
        outcome.steps += 1;
        outcome.max_depth = outcome.max_depth.max(explorer.memory().len());
        outcome.reached_exit = robot.at_exit();
    }

    info!(
        run = robot.run_index(),
        reached_exit = outcome.reached_exit,
        steps = outcome.steps,
        max_depth = outcome.max_depth,
        "episode finished"
    );
    Ok(outcome)
}
