//! Heading-indexed junction stack.

use super::direction::Heading;
use crate::error::{NavError, Result};

/// One junction left with unexplored branches.
///
/// Which junction it is follows from its position in the stack; only the
/// heading the robot arrived with is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JunctionRecord {
    pub arrival_heading: Heading,
}

/// A bounded last-in-first-out stack of open junctions.
///
/// Depth equals the number of junctions on the path from the start that
/// still had an unexplored branch when the robot left them.
#[derive(Debug, Clone)]
pub struct JunctionMemory {
    records: Vec<JunctionRecord>,
    capacity: usize,
}

impl JunctionMemory {
    /// Creates an empty stack holding at most `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Records a junction on top of the stack.
    pub fn push(&mut self, arrival_heading: Heading) -> Result<()> {
        if self.records.len() >= self.capacity {
            return Err(NavError::MemoryExhausted {
                capacity: self.capacity,
            });
        }
        self.records.push(JunctionRecord { arrival_heading });
        Ok(())
    }

    /// Arrival heading of the most recent open junction.
    #[must_use]
    pub fn peek_top(&self) -> Option<Heading> {
        self.records.last().map(|r| r.arrival_heading)
    }

    /// Removes the most recent junction. Popping an empty stack is a no-op.
    pub fn pop_top(&mut self) -> Option<Heading> {
        self.records.pop().map(|r| r.arrival_heading)
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator over records from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &JunctionRecord> {
        self.records.iter()
    }
}
