//! Coordinate-free navigation controller.
//!
//! This module provides:
//! - Robot-frame and maze-frame directions
//! - Local sensing snapshots and topology classification
//! - The heading-indexed junction stack
//! - The explore/backtrack policy and the controller session that drives it

mod controller;
mod direction;
mod memory;
mod policy;
mod sensing;

pub use controller::{ControllerState, Explorer, Mode};
pub use direction::{Heading, Relative};
pub use memory::{JunctionMemory, JunctionRecord};
pub use policy::{Chooser, Decision, MemoryEffect, Move, decide};
pub use sensing::{CellState, Sensor, Snapshot, Topology};
