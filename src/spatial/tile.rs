//! Tile data structure and hex-block parsing
//!
//! Tiles arrive as blank-line-delimited blocks of hex strings, one line per
//! row, two hex digits per byte. Every tile in one puzzle shares a fixed
//! byte width; heights may differ between tiles.

use crate::io::error::{Result, parse_error, parse_error_at};

/// An immutable rectangular block of raw bytes cut from the original map
///
/// All tiles in a puzzle instance share one byte width. Rows never contain
/// the canvas blank sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    rows: Vec<Vec<u8>>,
    width: usize,
}

impl Tile {
    /// Build a tile from raw byte rows
    ///
    /// # Errors
    ///
    /// Returns a parse error if the rows are empty or differ in length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let width = rows
            .first()
            .map(Vec::len)
            .ok_or_else(|| parse_error("tile block has no rows"))?;
        if rows.iter().any(|row| row.len() != width) {
            return Err(parse_error("tile rows differ in byte length"));
        }
        Ok(Self { rows, width })
    }

    /// Byte width shared by every row
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// First row of the tile, used for edge and start-tile detection
    pub fn first_row(&self) -> &[u8] {
        self.rows.first().map_or(&[], Vec::as_slice)
    }

    /// Iterate over the tile's rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Parse raw puzzle input into tiles
///
/// Blocks are separated by blank lines; each block line is an even-length
/// hex string decoding to one tile row.
///
/// # Errors
///
/// Returns a parse error if a line is odd-length or contains non-hex
/// digits, if rows within a block differ in byte length, or if tiles
/// across blocks differ in width.
pub fn parse_tiles(raw: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut block: Vec<Vec<u8>> = Vec::new();

    for (index, line) in raw.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !block.is_empty() {
                tiles.push(Tile::from_rows(std::mem::take(&mut block))?);
            }
            continue;
        }
        block.push(decode_hex_line(trimmed, index + 1)?);
    }
    if !block.is_empty() {
        tiles.push(Tile::from_rows(block)?);
    }

    if let Some(first) = tiles.first() {
        let width = first.width();
        if tiles.iter().any(|tile| tile.width() != width) {
            return Err(parse_error("tiles differ in byte width across blocks"));
        }
    }

    Ok(tiles)
}

fn decode_hex_line(line: &str, line_number: usize) -> Result<Vec<u8>> {
    if line.len() % 2 != 0 {
        return Err(parse_error_at("odd-length hex line", line_number));
    }
    if !line.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(parse_error_at(
            format!("non-hex digits in '{line}'"),
            line_number,
        ));
    }
    line.as_bytes()
        .chunks(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair)
                .map_err(|_| parse_error_at("non-hex digits", line_number))?;
            u8::from_str_radix(text, 16)
                .map_err(|_| parse_error_at(format!("invalid hex byte '{text}'"), line_number))
        })
        .collect()
}
