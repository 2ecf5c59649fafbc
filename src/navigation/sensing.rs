//! Local sensing: what the robot can see around itself on one tick.

use super::direction::{Heading, Relative};
use crate::error::{NavError, Result};

/// What lies in one relative direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Wall,
    /// Open and not yet visited
    Passage,
    /// Open and already traversed
    Visited,
    /// The maze exit (open, not yet visited)
    Exit,
}

impl CellState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Open cells the robot has never stood on.
    #[must_use]
    pub const fn is_unexplored(self) -> bool {
        matches!(self, Self::Passage | Self::Exit)
    }
}

/// The runtime side of the controller: per-tick sensing.
pub trait Sensor {
    /// Reads the cell in a relative direction.
    fn look(&self, direction: Relative) -> CellState;

    /// Current absolute heading.
    fn heading(&self) -> Heading;

    /// Zero-based index of the current run.
    fn run_index(&self) -> u32;
}

/// Readings for all four relative directions plus the heading they were
/// taken with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub heading: Heading,
    cells: [CellState; 4],
}

impl Snapshot {
    /// Builds a snapshot from `(direction, state)` readings.
    ///
    /// Every relative direction must be present; a later duplicate replaces
    /// an earlier one.
    pub fn from_readings(heading: Heading, readings: &[(Relative, CellState)]) -> Result<Self> {
        let mut cells = [None; 4];
        for &(direction, state) in readings {
            cells[direction.index()] = Some(state);
        }

        let mut complete = [CellState::Wall; 4];
        for direction in Relative::ALL {
            complete[direction.index()] =
                cells[direction.index()].ok_or(NavError::InvalidSnapshot { missing: direction })?;
        }

        Ok(Self {
            heading,
            cells: complete,
        })
    }

    /// Looks in all four directions.
    pub fn sense<S: Sensor + ?Sized>(sensor: &S) -> Self {
        let mut cells = [CellState::Wall; 4];
        for direction in Relative::ALL {
            cells[direction.index()] = sensor.look(direction);
        }
        Self {
            heading: sensor.heading(),
            cells,
        }
    }

    #[must_use]
    pub const fn get(&self, direction: Relative) -> CellState {
        self.cells[direction.index()]
    }

    /// Relative directions whose state satisfies `pred`, in [`Relative::ALL`] order.
    pub fn directions_where(&self, pred: impl Fn(CellState) -> bool) -> Vec<Relative> {
        Relative::ALL
            .into_iter()
            .filter(|&d| pred(self.get(d)))
            .collect()
    }

    /// Number of non-wall directions.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Visited neighbours other than the one behind.
    ///
    /// The cell behind is the one just left, so it is visited on every
    /// step but the first.
    #[must_use]
    pub fn visited_ahead_count(&self) -> usize {
        [Relative::Ahead, Relative::Left, Relative::Right]
            .into_iter()
            .filter(|&d| self.get(d) == CellState::Visited)
            .count()
    }
}

/// Shape of the current cell, from its number of openings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    DeadEnd,
    Corridor,
    Junction,
    Crossroad,
}

impl Topology {
    pub fn classify(snapshot: &Snapshot) -> Result<Self> {
        match snapshot.open_count() {
            0 => Err(NavError::NoNonWallDirection),
            1 => Ok(Self::DeadEnd),
            2 => Ok(Self::Corridor),
            3 => Ok(Self::Junction),
            _ => Ok(Self::Crossroad),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(ahead: CellState, behind: CellState, left: CellState, right: CellState) -> Snapshot {
        Snapshot::from_readings(
            Heading::North,
            &[
                (Relative::Ahead, ahead),
                (Relative::Behind, behind),
                (Relative::Left, left),
                (Relative::Right, right),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_missing_reading_is_invalid() {
        let err = Snapshot::from_readings(
            Heading::East,
            &[
                (Relative::Ahead, CellState::Passage),
                (Relative::Left, CellState::Wall),
                (Relative::Right, CellState::Wall),
            ],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            NavError::InvalidSnapshot {
                missing: Relative::Behind
            }
        ));
    }

    #[test]
    fn test_classify() {
        use CellState::{Passage, Visited, Wall};
        assert_eq!(Topology::classify(&snapshot(Passage, Wall, Wall, Wall)).unwrap(), Topology::DeadEnd);
        assert_eq!(Topology::classify(&snapshot(Passage, Visited, Wall, Wall)).unwrap(), Topology::Corridor);
        assert_eq!(Topology::classify(&snapshot(Passage, Visited, Wall, Passage)).unwrap(), Topology::Junction);
        assert_eq!(
            Topology::classify(&snapshot(Passage, Visited, Passage, Passage)).unwrap(),
            Topology::Crossroad
        );
    }

    #[test]
    fn test_all_walls_is_an_error() {
        use CellState::Wall;
        assert!(matches!(
            Topology::classify(&snapshot(Wall, Wall, Wall, Wall)),
            Err(NavError::NoNonWallDirection)
        ));
    }

    #[test]
    fn test_visited_count_ignores_behind() {
        use CellState::{Passage, Visited};
        let s = snapshot(Passage, Visited, Visited, Passage);
        assert_eq!(s.visited_ahead_count(), 1);
    }

    #[test]
    fn test_exit_counts_as_unexplored() {
        assert!(CellState::Exit.is_unexplored());
        assert!(CellState::Exit.is_open());
        assert!(!CellState::Visited.is_unexplored());
    }
}
