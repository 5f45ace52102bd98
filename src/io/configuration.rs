//! Solver constants and runtime configuration defaults

/// Byte value denoting a canvas cell that no tile has covered yet
///
/// Valid tile content never contains this byte, which is what makes the
/// blank scan in site selection correct.
pub const BLANK: u8 = b' ';

/// Placeholder substituted for byte sequences that cannot be decoded
pub const REPLACEMENT: char = '\u{FFFD}';

/// Glyph marking the answer position on the finished map
pub const DEFAULT_MARKER: char = '╳';

/// Characters permitted on the top edge of the finished map
pub const TOP_GLYPHS: &str = "╔╗═-";
/// Characters permitted on the bottom edge of the finished map
pub const BOTTOM_GLYPHS: &str = "╚╝═-";
/// Characters permitted in the leftmost column of the finished map
pub const LEFT_GLYPHS: &str = "╔╚║|";
/// Characters permitted in the rightmost column of the finished map
pub const RIGHT_GLYPHS: &str = "╗╝║|";

/// Byte run identifying the unique start tile at the top-left corner
pub const TOP_LEFT_CORNER: &[u8] = "╔".as_bytes();

/// Byte run identifying tiles that sit along the top edge
pub const HORIZONTAL_EDGE: &[u8] = "═".as_bytes();

// Safety limit so malformed input fails fast instead of exploring
// every permutation of the tile pool
/// Default maximum number of search nodes visited before giving up
pub const DEFAULT_STEP_BUDGET: usize = 1_000_000;

/// Number of search steps between progress display updates
pub const PROGRESS_TICK_INTERVAL: usize = 1024;
