//! Coordinate-free maze exploration.
//!
//! The [`navigation`] module holds the controller: a two-mode
//! explore/backtrack policy and the heading-indexed junction stack it uses
//! to unwind dead ends. The [`maze`] module is a reference runtime (grid
//! maze + simulated robot) used by the binary and the tests, and [`ui`]
//! renders it in a terminal.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod logging;
pub mod maze;
pub mod navigation;
pub mod params;
pub mod ui;

pub use error::{NavError, Result};
