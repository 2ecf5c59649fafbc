//! Tile grid mazes for the reference runtime.

use crate::error::{NavError, Result};
use crate::navigation::Heading;
use crate::params::MIN_MAZE_SIDE;
use rand::Rng;
use rand::seq::SliceRandom;

/// A single grid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Open,
}

/// A rectangular maze with a start and an exit tile.
///
/// `(x, y)` with `y` growing southwards; the border is always wall.
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    start: (usize, usize),
    exit: (usize, usize),
}

impl Maze {
    /// Generates a perfect maze (exactly one path between any two open tiles).
    ///
    /// Even dimensions are rounded up to the next odd number. Cells sit on
    /// odd coordinates and are carved by a randomised depth-first walk from
    /// the start in the north-west corner; the exit is the south-east cell.
    pub fn generate<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Self> {
        if width < MIN_MAZE_SIDE || height < MIN_MAZE_SIDE {
            return Err(NavError::Maze(format!(
                "maze must be at least {MIN_MAZE_SIDE}x{MIN_MAZE_SIDE}, got {width}x{height}"
            )));
        }
        let width = width | 1;
        let height = height | 1;

        let mut tiles = vec![Tile::Wall; width * height];
        let start = (1, 1);
        tiles[start.1 * width + start.0] = Tile::Open;

        let mut stack = vec![start];
        while let Some(&(x, y)) = stack.last() {
            let mut neighbours: Vec<(usize, usize)> = Heading::ALL
                .into_iter()
                .filter_map(|h| step2((x, y), h, width, height))
                .filter(|&(nx, ny)| tiles[ny * width + nx] == Tile::Wall)
                .collect();

            if neighbours.is_empty() {
                stack.pop();
                continue;
            }
            neighbours.shuffle(rng);
            let (nx, ny) = neighbours[0];
            // Knock down the wall between the two cells
            tiles[((y + ny) / 2) * width + (x + nx) / 2] = Tile::Open;
            tiles[ny * width + nx] = Tile::Open;
            stack.push((nx, ny));
        }

        Ok(Self {
            width,
            height,
            tiles,
            start,
            exit: (width - 2, height - 2),
        })
    }

    /// Parses an ASCII maze: `#` wall, `.` open, `S` start, `E` exit.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 || height == 0 {
            return Err(NavError::Maze("empty maze".into()));
        }

        let mut tiles = Vec::with_capacity(width * height);
        let mut start = None;
        let mut exit = None;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(NavError::Maze(format!("row {y} is not {width} tiles wide")));
            }
            for (x, c) in row.chars().enumerate() {
                let tile = match c {
                    '#' => Tile::Wall,
                    '.' => Tile::Open,
                    'S' => {
                        start = Some((x, y));
                        Tile::Open
                    }
                    'E' => {
                        exit = Some((x, y));
                        Tile::Open
                    }
                    other => {
                        return Err(NavError::Maze(format!("unexpected tile {other:?} at ({x}, {y})")));
                    }
                };
                tiles.push(tile);
            }
        }

        let start = start.ok_or_else(|| NavError::Maze("no start tile".into()))?;
        let exit = exit.ok_or_else(|| NavError::Maze("no exit tile".into()))?;
        Ok(Self {
            width,
            height,
            tiles,
            start,
            exit,
        })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn start(&self) -> (usize, usize) {
        self.start
    }

    #[must_use]
    pub const fn exit(&self) -> (usize, usize) {
        self.exit
    }

    /// Tile at `(x, y)`; anything outside the grid is wall.
    #[must_use]
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        if x >= self.width || y >= self.height {
            return Tile::Wall;
        }
        self.tiles[y * self.width + x]
    }

    #[must_use]
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.tile(x, y) == Tile::Open
    }

    /// The adjacent tile position in `heading`, if it lies on the grid.
    #[must_use]
    pub fn neighbour(&self, (x, y): (usize, usize), heading: Heading) -> Option<(usize, usize)> {
        let (nx, ny) = match heading {
            Heading::North => (Some(x), y.checked_sub(1)),
            Heading::East => (Some(x + 1), Some(y)),
            Heading::South => (Some(x), Some(y + 1)),
            Heading::West => (x.checked_sub(1), Some(y)),
        };
        match (nx, ny) {
            (Some(nx), Some(ny)) if nx < self.width && ny < self.height => Some((nx, ny)),
            _ => None,
        }
    }

    /// Number of open tiles.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|&&t| t == Tile::Open).count()
    }
}

/// The cell two tiles away in `heading`, if it is inside the border.
fn step2((x, y): (usize, usize), heading: Heading, width: usize, height: usize) -> Option<(usize, usize)> {
    let (nx, ny) = match heading {
        Heading::North => (x, y.checked_sub(2)?),
        Heading::East => (x + 2, y),
        Heading::South => (x, y + 2),
        Heading::West => (x.checked_sub(2)?, y),
    };
    (nx > 0 && ny > 0 && nx < width - 1 && ny < height - 1).then_some((nx, ny))
}
