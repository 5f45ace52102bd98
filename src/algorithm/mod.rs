//! Core assembly algorithm: border classification, canvas sizing,
//! backtracking search, and marker location

/// Lenient decoding and border-plausibility checks
pub mod border;
/// The backtracking assembly search
pub mod engine;
/// Marker glyph location on the finished canvas
pub mod marker;
/// Bitset over the unplaced tile pool
pub mod pool;
/// Canvas sizing and start-tile seeding
pub mod sizing;

pub use border::{BorderClassifier, BorderGlyphSets};
pub use engine::{AssemblyEngine, EngineConfig};
pub use pool::PoolMask;
