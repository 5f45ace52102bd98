//! Border-constrained tile-assembly engine for shredded text-art maps
//!
//! The solver parses hex-encoded byte tiles cut from a rectangular map,
//! reconstructs the original layout by backtracking search using decoded-text
//! plausibility as the placement constraint, then scans the finished map for
//! a marker glyph and reports its position.

#![forbid(unsafe_code)]

/// Search, border classification, canvas sizing, and marker location
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile and canvas data structures
pub mod spatial;

pub use io::error::{Result, SolverError};
