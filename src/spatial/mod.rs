//! Spatial data structures for the assembly search
//!
//! This module contains:
//! - Immutable byte tiles parsed from hex-encoded input
//! - The mutable canvas that tiles are placed onto

/// Canvas matrix and placement-site location
pub mod canvas;
/// Tile data structure and hex-block parsing
pub mod tile;

pub use canvas::Canvas;
pub use tile::Tile;
