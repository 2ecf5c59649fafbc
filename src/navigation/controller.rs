//! The controller session: mode, counters and junction memory for one robot.

use super::memory::JunctionMemory;
use super::policy::{self, Chooser, Decision, Move};
use super::sensing::{Sensor, Snapshot};
use crate::error::Result;
use crate::params::MEMORY_CAPACITY;
use tracing::debug;

/// Which branch of the policy runs on the next tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Looking for unvisited cells
    #[default]
    Explore,
    /// Retracing the path back to the last open junction
    Backtrack,
}

/// Counters and mode owned by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControllerState {
    /// Runs started by this controller
    pub runs: u32,
    /// Ticks decided in the current run
    pub steps: u64,
    pub mode: Mode,
}

impl ControllerState {
    #[must_use]
    pub const fn is_first_step(&self) -> bool {
        self.steps == 0
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!(from = ?self.mode, to = ?mode, step = self.steps, "mode transition");
            self.mode = mode;
        }
    }
}

/// A maze explorer that never records where it is.
///
/// Owned by the caller for the duration of a run; the runtime calls
/// [`Explorer::control`] (or [`Explorer::decide_next_move`]) once per tick
/// and [`Explorer::on_run_reset`] when a new run begins.
#[derive(Debug, Clone)]
pub struct Explorer {
    state: ControllerState,
    memory: JunctionMemory,
    last: Option<Decision>,
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(MEMORY_CAPACITY)
    }
}

impl Explorer {
    /// Creates an explorer whose junction stack holds `memory_capacity` records.
    #[must_use]
    pub fn new(memory_capacity: usize) -> Self {
        Self {
            state: ControllerState::default(),
            memory: JunctionMemory::with_capacity(memory_capacity),
            last: None,
        }
    }

    /// Senses all four directions and decides the next move.
    ///
    /// The very first tick of run zero starts a fresh run, so a runtime
    /// that never calls [`Explorer::on_run_reset`] still gets clean state.
    pub fn control<S, C>(&mut self, sensor: &S, chooser: &mut C) -> Result<Move>
    where
        S: Sensor + ?Sized,
        C: Chooser + ?Sized,
    {
        if sensor.run_index() == 0 && self.state.steps == 0 && self.state.runs == 0 {
            self.begin_run();
        }
        let snapshot = Snapshot::sense(sensor);
        self.decide_next_move(&snapshot, chooser)
    }

    /// Decides the next move from a snapshot.
    pub fn decide_next_move<C: Chooser + ?Sized>(
        &mut self,
        snapshot: &Snapshot,
        chooser: &mut C,
    ) -> Result<Move> {
        let decision = policy::decide(snapshot, &mut self.state, &mut self.memory, chooser)?;
        self.state.steps += 1;
        self.last = Some(decision);
        Ok(decision.chosen)
    }

    /// Clears junction memory and returns to exploring for a new run.
    pub fn on_run_reset(&mut self) {
        self.begin_run();
    }

    fn begin_run(&mut self) {
        self.memory.clear();
        self.state.mode = Mode::Explore;
        self.state.steps = 0;
        self.state.runs += 1;
        self.last = None;
        debug!(run = self.state.runs, "run started");
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.state.mode
    }

    #[must_use]
    pub const fn state(&self) -> &ControllerState {
        &self.state
    }

    #[must_use]
    pub const fn memory(&self) -> &JunctionMemory {
        &self.memory
    }

    /// The decision taken on the previous tick of this run.
    #[must_use]
    pub const fn last_decision(&self) -> Option<&Decision> {
        self.last.as_ref()
    }
}
