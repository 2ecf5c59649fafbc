//! Terminal viewer for the reference runtime.

pub mod field;
pub mod render;
