//! Canvas sizing and start-tile seeding
//!
//! Global canvas dimensions are derived from the tile population before any
//! search happens: tiles whose first row carries a horizontal top-edge run
//! count the map's width in tiles, and the height follows from the total
//! row count. The unique tile starting with the top-left corner seeds the
//! blank canvas at the origin.

use crate::algorithm::pool::PoolMask;
use crate::io::configuration::{HORIZONTAL_EDGE, TOP_LEFT_CORNER};
use crate::io::error::{Result, SolverError, parse_error};
use crate::spatial::canvas::Canvas;
use crate::spatial::tile::Tile;

/// Size the blank canvas, place the start tile, and return the canvas
/// with the pool of remaining tiles
///
/// # Errors
///
/// Returns a parse error if the tile set is empty, carries no top-edge
/// tiles, or has a total height not divisible by the width in tiles, and
/// [`SolverError::NoUniqueStart`] if zero or several tiles begin with the
/// top-left corner run.
pub fn size_and_seed(tiles: &[Tile]) -> Result<(Canvas, PoolMask)> {
    let tile_width = tiles
        .first()
        .map(Tile::width)
        .ok_or_else(|| parse_error("empty tile set"))?;

    let width_in_tiles = tiles
        .iter()
        .filter(|tile| contains_run(tile.first_row(), HORIZONTAL_EDGE))
        .count();
    if width_in_tiles == 0 {
        return Err(parse_error("no tiles carry a horizontal top-edge run"));
    }

    let total_rows: usize = tiles.iter().map(Tile::height).sum();
    if total_rows % width_in_tiles != 0 {
        return Err(parse_error(format!(
            "total tile height {total_rows} is not divisible by map width {width_in_tiles}"
        )));
    }

    let canvas_height = total_rows / width_in_tiles;
    let canvas_width = width_in_tiles * tile_width;

    let mut starts = tiles
        .iter()
        .enumerate()
        .filter(|(_, tile)| tile.first_row().starts_with(TOP_LEFT_CORNER));
    let first = starts.next();
    let extra = starts.count();
    let Some((start_index, start_tile)) = first else {
        return Err(SolverError::NoUniqueStart { candidates: 0 });
    };
    if extra > 0 {
        return Err(SolverError::NoUniqueStart {
            candidates: extra + 1,
        });
    }

    let blank = Canvas::blank(canvas_height, canvas_width);
    let seeded = blank
        .with_tile(start_tile, 0, 0)
        .ok_or_else(|| parse_error("start tile does not fit the sized canvas"))?;

    let mut pool = PoolMask::full(tiles.len());
    pool.remove(start_index);
    Ok((seeded, pool))
}

fn contains_run(row: &[u8], run: &[u8]) -> bool {
    !run.is_empty() && row.windows(run.len()).any(|window| window == run)
}
