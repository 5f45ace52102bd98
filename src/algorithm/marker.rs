//! Marker glyph location on the finished canvas

use crate::algorithm::border::decode_lenient;
use crate::io::error::{Result, SolverError};
use crate::spatial::canvas::Canvas;

/// Position of the marker glyph in the decoded map
///
/// The column is a character index within the decoded row, not a byte
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPosition {
    /// Zero-based row index
    pub row: usize,
    /// Zero-based character column within that row
    pub column: usize,
}

impl MarkerPosition {
    /// The puzzle answer: row index times column index
    pub const fn answer(&self) -> usize {
        self.row * self.column
    }
}

/// Find the first occurrence of the marker glyph, scanning rows top to
/// bottom
///
/// # Errors
///
/// Returns [`SolverError::MarkerNotFound`] if the glyph is absent.
pub fn locate(canvas: &Canvas, marker: char) -> Result<MarkerPosition> {
    for row in 0..canvas.height() {
        let Some(bytes) = canvas.row_bytes(row) else {
            continue;
        };
        let text = decode_lenient(bytes);
        if let Some(column) = text.chars().position(|ch| ch == marker) {
            return Ok(MarkerPosition { row, column });
        }
    }
    Err(SolverError::MarkerNotFound { glyph: marker })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::tile::Tile;

    fn canvas_from_rows(rows: &[&str]) -> Canvas {
        let rows: Vec<Vec<u8>> = rows.iter().map(|r| r.as_bytes().to_vec()).collect();
        let width = rows.first().map_or(0, Vec::len);
        let blank = Canvas::blank(rows.len(), width);
        let tile = Tile::from_rows(rows).expect("bad test canvas");
        blank.with_tile(&tile, 0, 0).expect("canvas tile should fit")
    }

    #[test]
    fn test_marker_column_counts_characters_not_bytes() {
        let canvas = canvas_from_rows(&["╔══╗", "║a╳bc║", "╚══╝"]);
        let position = locate(&canvas, '╳').unwrap();
        assert_eq!(position, MarkerPosition { row: 1, column: 2 });
        assert_eq!(position.answer(), 2);
    }

    #[test]
    fn test_corner_marker_in_first_row() {
        let canvas = canvas_from_rows(&["╔══╗", "║abcdef║", "╚══╝"]);
        let position = locate(&canvas, '╗').unwrap();
        assert_eq!(position, MarkerPosition { row: 0, column: 3 });
        assert_eq!(position.answer(), 0);
    }

    #[test]
    fn test_missing_marker_reported() {
        let canvas = canvas_from_rows(&["╔══╗", "╚══╝"]);
        let err = locate(&canvas, '╳').unwrap_err();
        assert!(matches!(err, SolverError::MarkerNotFound { glyph: '╳' }));
    }
}
