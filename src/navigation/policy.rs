//! The explore/backtrack decision policy.
//!
//! One call per tick. The policy looks only at the local snapshot, the
//! current mode and the top of the junction stack:
//!
//! - **Explore**: never reverse in a corridor, prefer unexplored branches
//!   at junctions and remember each junction left with branches to spare.
//!   Reaching a dead end (after the first step) switches to backtracking.
//! - **Backtrack**: retrace corridors, and at each junction either resume
//!   exploring through an unexplored branch or pop the junction and leave
//!   it opposite to the heading it was first entered with.

use super::controller::{ControllerState, Mode};
use super::direction::{Heading, Relative};
use super::memory::JunctionMemory;
use super::sensing::{CellState, Snapshot, Topology};
use crate::error::{NavError, Result};
use rand::Rng;
use tracing::{debug, warn};

/// Uniform choice over a candidate set.
///
/// Implemented for every [`rand::Rng`]; tests may script it instead.
pub trait Chooser {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Chooser for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Direction the robot is told to take.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Move {
    /// Face a direction relative to the current heading, then advance.
    Turn(Relative),
    /// Face an absolute heading, then advance.
    Face(Heading),
}

impl Move {
    /// Absolute heading after the move, given the heading before it.
    #[must_use]
    pub const fn heading(self, current: Heading) -> Heading {
        match self {
            Self::Turn(relative) => current.turn(relative),
            Self::Face(heading) => heading,
        }
    }

    /// The move expressed in the robot frame.
    #[must_use]
    pub const fn relative(self, current: Heading) -> Relative {
        match self {
            Self::Turn(relative) => relative,
            Self::Face(heading) => current.relative_to(heading),
        }
    }
}

/// What a decision did to the junction stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryEffect {
    Unchanged,
    Pushed(Heading),
    Popped(Heading),
    /// A pop was needed but the stack was empty.
    Underflow,
}

/// The outcome of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub chosen: Move,
    pub topology: Topology,
    /// Mode after the decision
    pub mode: Mode,
    pub memory: MemoryEffect,
}

/// Chooses the next move and applies mode and memory side effects.
///
/// The returned move always points at a non-wall cell.
pub fn decide<C: Chooser + ?Sized>(
    snapshot: &Snapshot,
    state: &mut ControllerState,
    memory: &mut JunctionMemory,
    chooser: &mut C,
) -> Result<Decision> {
    let topology = Topology::classify(snapshot)?;
    match state.mode {
        Mode::Explore => explore(snapshot, topology, state, memory, chooser),
        Mode::Backtrack => backtrack(snapshot, topology, state, memory, chooser),
    }
}

fn explore<C: Chooser + ?Sized>(
    snapshot: &Snapshot,
    topology: Topology,
    state: &mut ControllerState,
    memory: &mut JunctionMemory,
    chooser: &mut C,
) -> Result<Decision> {
    let mut effect = MemoryEffect::Unchanged;

    let direction = match topology {
        Topology::DeadEnd => {
            let direction = dead_end(snapshot, chooser)?;
            // Nothing to return from on the first step of a run
            if !state.is_first_step() {
                state.set_mode(Mode::Backtrack);
            }
            direction
        }
        Topology::Corridor => corridor(snapshot, chooser)?,
        Topology::Junction | Topology::Crossroad => {
            let direction = junction(snapshot, chooser)?;
            let has_unexplored = Relative::ALL
                .into_iter()
                .any(|d| snapshot.get(d).is_unexplored());
            if snapshot.visited_ahead_count() == 0 && has_unexplored {
                memory.push(snapshot.heading)?;
                debug!(
                    arrival = ?snapshot.heading,
                    depth = memory.len(),
                    "recorded junction"
                );
                effect = MemoryEffect::Pushed(snapshot.heading);
            }
            direction
        }
    };

    Ok(Decision {
        chosen: Move::Turn(direction),
        topology,
        mode: state.mode,
        memory: effect,
    })
}

fn backtrack<C: Chooser + ?Sized>(
    snapshot: &Snapshot,
    topology: Topology,
    state: &mut ControllerState,
    memory: &mut JunctionMemory,
    chooser: &mut C,
) -> Result<Decision> {
    let mut effect = MemoryEffect::Unchanged;

    let chosen = match topology {
        Topology::Junction | Topology::Crossroad => {
            let unexplored = snapshot.directions_where(CellState::is_unexplored);
            if let Some(direction) = choose(chooser, &unexplored) {
                // The junction is still on the stack: it was never popped
                state.set_mode(Mode::Explore);
                Move::Turn(direction)
            } else if let Some(arrival) = memory.pop_top() {
                effect = MemoryEffect::Popped(arrival);
                let out = arrival.opposite();
                if snapshot.get(snapshot.heading.relative_to(out)).is_open() {
                    debug!(?arrival, depth = memory.len(), "unwound junction");
                    Move::Face(out)
                } else {
                    warn!(
                        ?arrival,
                        heading = ?snapshot.heading,
                        "reverse of arrival heading is walled off, treating junction as a dead end"
                    );
                    Move::Turn(dead_end(snapshot, chooser)?)
                }
            } else {
                debug!("junction stack empty while backtracking");
                effect = MemoryEffect::Underflow;
                Move::Turn(dead_end(snapshot, chooser)?)
            }
        }
        Topology::Corridor => Move::Turn(corridor(snapshot, chooser)?),
        Topology::DeadEnd => Move::Turn(dead_end(snapshot, chooser)?),
    };

    Ok(Decision {
        chosen,
        topology,
        mode: state.mode,
        memory: effect,
    })
}

/// Uniform among non-wall directions.
fn dead_end<C: Chooser + ?Sized>(snapshot: &Snapshot, chooser: &mut C) -> Result<Relative> {
    let open = snapshot.directions_where(CellState::is_open);
    choose(chooser, &open).ok_or(NavError::NoNonWallDirection)
}

/// Uniform among non-wall directions other than behind.
fn corridor<C: Chooser + ?Sized>(snapshot: &Snapshot, chooser: &mut C) -> Result<Relative> {
    let forward: Vec<Relative> = snapshot
        .directions_where(CellState::is_open)
        .into_iter()
        .filter(|&d| d != Relative::Behind)
        .collect();
    match choose(chooser, &forward) {
        Some(direction) => Ok(direction),
        None => dead_end(snapshot, chooser),
    }
}

/// Unexplored branches first, otherwise any non-wall direction.
fn junction<C: Chooser + ?Sized>(snapshot: &Snapshot, chooser: &mut C) -> Result<Relative> {
    let unexplored = snapshot.directions_where(CellState::is_unexplored);
    match choose(chooser, &unexplored) {
        Some(direction) => Ok(direction),
        None => dead_end(snapshot, chooser),
    }
}

fn choose<C: Chooser + ?Sized>(chooser: &mut C, candidates: &[Relative]) -> Option<Relative> {
    if candidates.is_empty() {
        return None;
    }
    let index = chooser.pick_index(candidates.len()).min(candidates.len() - 1);
    Some(candidates[index])
}
