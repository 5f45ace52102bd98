//! Input/output concerns: CLI surface, constants, errors, progress display

/// Command-line interface and run orchestration
pub mod cli;
/// Solver constants and runtime configuration defaults
pub mod configuration;
/// Error types for parsing, assembly, and marker location
pub mod error;
/// Search progress display
pub mod progress;
