//! Command-line interface and run orchestration

use crate::algorithm::border::{BorderClassifier, decode_lenient};
use crate::algorithm::engine::{AssemblyEngine, EngineConfig};
use crate::algorithm::marker::locate;
use crate::algorithm::sizing::size_and_seed;
use crate::io::configuration::{DEFAULT_MARKER, DEFAULT_STEP_BUDGET};
use crate::io::error::{Result, SolverError, parse_error};
use crate::io::progress::SearchProgress;
use crate::spatial::canvas::Canvas;
use crate::spatial::tile::{Tile, parse_tiles};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mapstitch")]
#[command(
    author,
    version,
    about = "Reassemble a shredded text-art map and locate its marker"
)]
/// Command-line arguments for the assembly solver
pub struct Cli {
    /// Input file of blank-line-separated hex tile blocks
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Marker glyph to locate on the assembled map
    #[arg(short, long, default_value_t = DEFAULT_MARKER)]
    pub marker: char,

    /// Seed shuffling the candidate trial order
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum search nodes before giving up
    #[arg(long, default_value_t = DEFAULT_STEP_BUDGET)]
    pub steps: usize,

    /// Expected tile width in bytes, checked against the parsed input
    ///
    /// The width is derived from the input when omitted.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print the assembled map to stderr
    #[arg(long)]
    pub show_map: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs the full pipeline: parse, size, assemble, locate
pub struct SolveRunner {
    cli: Cli,
}

impl SolveRunner {
    /// Create a runner from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Read the input file and solve it, returning the puzzle answer
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or any pipeline stage
    /// fails.
    pub fn run(&self) -> Result<usize> {
        let raw = std::fs::read_to_string(&self.cli.input).map_err(|source| {
            SolverError::FileSystem {
                path: self.cli.input.clone(),
                operation: "read",
                source,
            }
        })?;
        self.solve_text(&raw)
    }

    /// Solve raw puzzle text, returning the puzzle answer
    ///
    /// # Errors
    ///
    /// Returns an error when parsing, sizing, assembly, or marker
    /// location fails.
    // Allow print for showing the assembled map on request
    #[allow(clippy::print_stderr)]
    pub fn solve_text(&self, raw: &str) -> Result<usize> {
        let tiles = parse_tiles(raw)?;
        if let Some(expected) = self.cli.width {
            let actual = tiles.first().map_or(0, Tile::width);
            if actual != expected {
                return Err(parse_error(format!(
                    "tiles are {actual} bytes wide, expected {expected}"
                )));
            }
        }
        let (canvas, pool) = size_and_seed(&tiles)?;

        let config = EngineConfig {
            step_budget: self.cli.steps,
            shuffle_seed: self.cli.seed,
        };
        let engine = AssemblyEngine::new(&tiles, BorderClassifier::default(), config);

        let progress = self.cli.should_show_progress().then(SearchProgress::new);
        let assembled = engine.assemble_with_progress(&canvas, &pool, progress.as_ref())?;

        if self.cli.show_map {
            eprintln!("{}", render_framed(&assembled));
        }

        let position = locate(&assembled, self.cli.marker)?;
        Ok(position.answer())
    }
}

/// Render the assembled map inside an asterisk frame
fn render_framed(canvas: &Canvas) -> String {
    let rows: Vec<String> = (0..canvas.height())
        .filter_map(|row| canvas.row_bytes(row))
        .map(decode_lenient)
        .collect();
    let inner_width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    let edge = "*".repeat(inner_width + 2);

    let mut framed = String::new();
    framed.push_str(&edge);
    for row in &rows {
        framed.push('\n');
        framed.push('*');
        framed.push_str(row);
        for _ in row.chars().count()..inner_width {
            framed.push(' ');
        }
        framed.push('*');
    }
    framed.push('\n');
    framed.push_str(&edge);
    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_framed_pads_to_widest_row() {
        let rows = vec!["╔══╗".as_bytes().to_vec(), "║abcdef║".as_bytes().to_vec()];
        // Rows share byte width but differ in character count once decoded
        let padded: Vec<Vec<u8>> = rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                row.resize(12, b' ');
                row
            })
            .collect();
        let tile = Tile::from_rows(padded).unwrap();
        let canvas = Canvas::blank(2, 12)
            .with_tile(&tile, 0, 0)
            .expect("canvas tile should fit");

        let framed = render_framed(&canvas);
        let lines: Vec<&str> = framed.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.starts_with('*')));
        assert!(lines.iter().all(|line| line.ends_with('*')));
    }
}
