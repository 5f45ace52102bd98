//! Error types for parsing, assembly, and marker location

use std::fmt;
use std::path::PathBuf;

/// Main error type for all solver operations
#[derive(Debug)]
pub enum SolverError {
    /// Malformed tile block or inconsistent canvas sizing
    Parse {
        /// Description of what's wrong with the input
        reason: String,
        /// One-based input line number, when known
        line: Option<usize>,
    },

    /// Zero or multiple tiles qualify as the top-left start tile
    NoUniqueStart {
        /// Number of tiles whose first row begins with the corner run
        candidates: usize,
    },

    /// No tile in the pool yields a completed assembly
    ///
    /// Recoverable one level up during backtracking; fatal if it
    /// propagates out of the top-level call.
    DeadEnd {
        /// Tiles already placed on the canvas when the search gave up
        placed: usize,
        /// Tiles still unplaced in the pool
        pool_remaining: usize,
    },

    /// Search node budget spent before the assembly completed
    BudgetExhausted {
        /// Number of search nodes visited
        steps: usize,
    },

    /// Marker glyph absent from the finished canvas
    MarkerNotFound {
        /// The glyph that was searched for
        glyph: char,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                reason,
                line: Some(line),
            } => {
                write!(f, "Parse error at line {line}: {reason}")
            }
            Self::Parse { reason, line: None } => {
                write!(f, "Parse error: {reason}")
            }
            Self::NoUniqueStart { candidates } => {
                write!(
                    f,
                    "No unique start tile: {candidates} tiles begin with the top-left corner"
                )
            }
            Self::DeadEnd {
                placed,
                pool_remaining,
            } => {
                write!(
                    f,
                    "Dead end: no placement completes the map ({placed} tiles placed, {pool_remaining} remaining)"
                )
            }
            Self::BudgetExhausted { steps } => {
                write!(f, "Search budget exhausted after {steps} steps")
            }
            Self::MarkerNotFound { glyph } => {
                write!(f, "Marker '{glyph}' not found in the assembled map")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;

/// Create a parse error with no line information
pub fn parse_error(reason: impl Into<String>) -> SolverError {
    SolverError::Parse {
        reason: reason.into(),
        line: None,
    }
}

/// Create a parse error attributed to a one-based input line
pub fn parse_error_at(reason: impl Into<String>, line: usize) -> SolverError {
    SolverError::Parse {
        reason: reason.into(),
        line: Some(line),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_line() {
        let err = parse_error_at("odd-length hex line", 7);
        assert_eq!(
            err.to_string(),
            "Parse error at line 7: odd-length hex line"
        );

        let bare = parse_error("empty tile set");
        assert_eq!(bare.to_string(), "Parse error: empty tile set");
    }

    #[test]
    fn test_dead_end_display() {
        let err = SolverError::DeadEnd {
            placed: 3,
            pool_remaining: 2,
        };
        assert_eq!(
            err.to_string(),
            "Dead end: no placement completes the map (3 tiles placed, 2 remaining)"
        );
    }
}
