//! Canvas matrix and placement-site location
//!
//! The canvas is the full rectangular byte matrix being assembled. Each
//! search branch owns an independent copy; placing a tile produces a new
//! canvas rather than mutating shared state, so a failed branch can never
//! corrupt a sibling.

use crate::io::configuration::BLANK;
use crate::spatial::tile::Tile;
use ndarray::Array2;

/// Mutable byte matrix progressively overwritten by tile placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    data: Array2<u8>,
}

impl Canvas {
    /// Allocate a canvas filled with the blank sentinel
    pub fn blank(height: usize, width: usize) -> Self {
        Self {
            data: Array2::from_elem((height, width), BLANK),
        }
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Width in bytes
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    /// Borrow one row as a byte slice
    pub fn row_bytes(&self, row: usize) -> Option<&[u8]> {
        if row >= self.height() {
            return None;
        }
        // Rows of a standard-layout matrix are contiguous
        self.data.row(row).to_slice()
    }

    /// Copy-on-branch placement: a new canvas with the tile's region
    /// overwritten, or `None` if the tile overruns the canvas bounds
    pub fn with_tile(&self, tile: &Tile, row: usize, col: usize) -> Option<Self> {
        if row + tile.height() > self.height() || col + tile.width() > self.width() {
            return None;
        }
        let mut placed = self.clone();
        for (i, line) in tile.rows().enumerate() {
            for (j, &byte) in line.iter().enumerate() {
                if let Some(cell) = placed.data.get_mut((row + i, col + j)) {
                    *cell = byte;
                }
            }
        }
        Some(placed)
    }

    /// Locate the next placement site, or `None` when the canvas is full
    ///
    /// The site is on the first row still containing a blank byte. Within
    /// that row the column comes from the blank/non-blank transition: a
    /// filled prefix puts the tile right after it, a blank prefix puts the
    /// tile ending where the filled run begins, and a wholly blank row
    /// starts at column zero. The result is aligned down to a multiple of
    /// the tile width.
    pub fn next_open_site(&self, tile_width: usize) -> Option<(usize, usize)> {
        if tile_width == 0 {
            return None;
        }
        for (row, line) in self.data.rows().into_iter().enumerate() {
            let Some(first_blank) = line.iter().position(|&b| b == BLANK) else {
                continue;
            };
            let col = if first_blank > 0 {
                first_blank
            } else {
                line.iter()
                    .position(|&b| b != BLANK)
                    .map_or(0, |filled| filled.saturating_sub(tile_width))
            };
            return Some((row, col - col % tile_width));
        }
        None
    }
}
