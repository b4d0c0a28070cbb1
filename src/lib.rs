//! Wall autotile generation and atlas fusing for 2D tile maps
//!
//! A wall tile's look depends on which of its eight neighbors are walls too.
//! The generator composes one tile per 8-bit neighbor mask from five
//! hand-drawn corner fragments; the fuser collapses identical tiles into a
//! grid atlas and emits a table mapping every mask to its atlas slot.

#![forbid(unsafe_code)]

/// Atlas deduplication, packing and lookup table output
pub mod atlas;
/// Corner composition and tile assembly from template fragments
pub mod compose;
/// Input/output operations and error handling
pub mod io;

pub use io::error::{AlgorithmError, Result};
