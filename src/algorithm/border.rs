//! Lenient decoding and border-plausibility checks
//!
//! The search has no pixel data to match tile edges against. Instead it
//! relies on how UTF-8 fails: a multi-byte character legitimately straddles
//! two adjacent tiles, so an undecodable sequence at either extremity of a
//! token is expected in a partial canvas, while one in the middle of a
//! token signals a bad adjacency. Combined with fixed glyph vocabularies
//! for the four map edges this yields the single accept/reject predicate
//! driving the search.

use crate::io::configuration::{
    BOTTOM_GLYPHS, LEFT_GLYPHS, REPLACEMENT, RIGHT_GLYPHS, TOP_GLYPHS,
};
use crate::spatial::canvas::Canvas;

/// Characters permitted along each edge of the finished map
///
/// Passed explicitly so puzzle instances (and tests) can use different
/// glyph vocabularies without interference.
#[derive(Debug, Clone)]
pub struct BorderGlyphSets {
    /// Glyphs allowed on the first row
    pub top: String,
    /// Glyphs allowed on the last row
    pub bottom: String,
    /// Glyphs allowed in the first column
    pub left: String,
    /// Glyphs allowed in the last column
    pub right: String,
}

impl Default for BorderGlyphSets {
    fn default() -> Self {
        Self {
            top: TOP_GLYPHS.to_owned(),
            bottom: BOTTOM_GLYPHS.to_owned(),
            left: LEFT_GLYPHS.to_owned(),
            right: RIGHT_GLYPHS.to_owned(),
        }
    }
}

/// Validity oracle for candidate canvas states
#[derive(Debug, Clone, Default)]
pub struct BorderClassifier {
    glyphs: BorderGlyphSets,
}

impl BorderClassifier {
    /// Create a classifier with an explicit glyph vocabulary
    pub const fn new(glyphs: BorderGlyphSets) -> Self {
        Self { glyphs }
    }

    /// Test whether a candidate canvas is still consistent with a
    /// well-formed rectangular map
    ///
    /// Every decoded row must be plausible, and the non-blank characters
    /// of the first row, last row, first column, and last column must stay
    /// within their edge vocabularies.
    pub fn is_valid_border_state(&self, canvas: &Canvas) -> bool {
        let mut decoded = Vec::with_capacity(canvas.height());
        for row in 0..canvas.height() {
            let Some(bytes) = canvas.row_bytes(row) else {
                return false;
            };
            let text = decode_lenient(bytes);
            if !line_is_plausible(&text) {
                return false;
            }
            decoded.push(text);
        }

        let within = |text: &str, set: &str| {
            text.chars().all(|ch| ch == ' ' || set.contains(ch))
        };
        if !decoded.first().is_some_and(|t| within(t, &self.glyphs.top)) {
            return false;
        }
        if !decoded.last().is_some_and(|t| within(t, &self.glyphs.bottom)) {
            return false;
        }
        for text in &decoded {
            if let Some(first) = text.chars().next() {
                if first != ' ' && !self.glyphs.left.contains(first) {
                    return false;
                }
            }
            if let Some(last) = text.chars().last() {
                if last != ' ' && !self.glyphs.right.contains(last) {
                    return false;
                }
            }
        }
        true
    }
}

/// Decode a byte row as UTF-8, substituting one replacement character for
/// each invalid or truncated sequence
///
/// Never fails. The substitution-per-sequence behavior matters: one
/// replacement at a token boundary marks a character split across tiles,
/// which `line_is_plausible` treats as acceptable.
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;
    while let Some((&lead, tail)) = rest.split_first() {
        if lead < 0x80 {
            out.push(char::from(lead));
            rest = tail;
            continue;
        }
        // Continuation count and the bounds of the first continuation byte,
        // which carry the overlong/surrogate/out-of-range restrictions
        let (len, lo, hi) = match lead {
            0xC2..=0xDF => (1, 0x80, 0xBF),
            0xE0 => (2, 0xA0, 0xBF),
            0xE1..=0xEC | 0xEE..=0xEF => (2, 0x80, 0xBF),
            0xED => (2, 0x80, 0x9F),
            0xF0 => (3, 0x90, 0xBF),
            0xF1..=0xF3 => (3, 0x80, 0xBF),
            0xF4 => (3, 0x80, 0x8F),
            _ => {
                out.push(REPLACEMENT);
                rest = tail;
                continue;
            }
        };

        let mut value = u32::from(lead) & (0x3F >> len);
        let mut consumed = len;
        for k in 0..len {
            match tail.get(k) {
                Some(&byte) => {
                    let (min, max) = if k == 0 { (lo, hi) } else { (0x80, 0xBF) };
                    if byte < min || byte > max {
                        consumed = k;
                        break;
                    }
                    value = (value << 6) | u32::from(byte & 0x3F);
                }
                None => {
                    consumed = k;
                    break;
                }
            }
        }

        if consumed == len {
            match char::from_u32(value) {
                Some(ch) => out.push(ch),
                None => out.push(REPLACEMENT),
            }
        } else {
            // Maximal valid subpart becomes a single replacement
            out.push(REPLACEMENT);
        }
        rest = tail.get(consumed..).unwrap_or(&[]);
    }
    out
}

/// Test whether a decoded line could belong to a well-formed partial map
///
/// Splits the line into whitespace-delimited tokens and rejects any token
/// with a replacement character away from its extremities.
pub fn line_is_plausible(text: &str) -> bool {
    text.split_whitespace()
        .all(|token| !token.trim_matches(REPLACEMENT).contains(REPLACEMENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::tile::Tile;

    fn tile(rows: &[&str]) -> Tile {
        let rows = rows.iter().map(|r| r.as_bytes().to_vec()).collect();
        Tile::from_rows(rows).expect("bad test tile")
    }

    #[test]
    fn test_decode_ascii_passthrough() {
        assert_eq!(decode_lenient(b"hello"), "hello");
    }

    #[test]
    fn test_decode_box_drawing() {
        assert_eq!(decode_lenient("╔══╗".as_bytes()), "╔══╗");
    }

    #[test]
    fn test_decode_truncated_sequence_yields_one_replacement() {
        // First two bytes of '╔' (e2 95 94)
        assert_eq!(decode_lenient(&[0xE2, 0x95]), "\u{FFFD}");
        assert_eq!(decode_lenient(&[0x61, 0xE2, 0x95]), "a\u{FFFD}");
    }

    #[test]
    fn test_decode_stray_continuation_bytes() {
        assert_eq!(decode_lenient(&[0x94, 0x62]), "\u{FFFD}b");
    }

    #[test]
    fn test_decode_invalid_continuation_resumes_at_offender() {
        // Valid prefix e2 95 followed by a space collapses to one
        // replacement, the space survives
        assert_eq!(decode_lenient(&[0xE2, 0x95, 0x20]), "\u{FFFD} ");
    }

    #[test]
    fn test_decode_rejects_surrogates_and_overlongs() {
        assert_eq!(decode_lenient(&[0xED, 0xA0, 0x80]), "\u{FFFD}\u{FFFD}\u{FFFD}");
        assert_eq!(decode_lenient(&[0xC0, 0xAF]), "\u{FFFD}\u{FFFD}");
    }

    #[test]
    fn test_plausible_allows_replacement_at_token_edges() {
        assert!(line_is_plausible("║a\u{FFFD} \u{FFFD}bc║"));
        assert!(line_is_plausible("\u{FFFD}\u{FFFD}word"));
        assert!(line_is_plausible("clean line"));
    }

    #[test]
    fn test_plausible_rejects_replacement_inside_token() {
        assert!(!line_is_plausible("ab\u{FFFD}cd"));
        assert!(!line_is_plausible("ok ab\u{FFFD}cd ok"));
    }

    #[test]
    fn test_border_state_accepts_partial_map() {
        let canvas = Canvas::blank(4, 12);
        let placed = canvas.with_tile(&tile(&["╔═", "║abc"]), 0, 0).expect("placement should fit");
        assert!(BorderClassifier::default().is_valid_border_state(&placed));
    }

    #[test]
    fn test_border_state_rejects_bad_top_row() {
        let canvas = Canvas::blank(4, 12);
        let placed = canvas.with_tile(&tile(&["║abc", "╚═"]), 0, 0).expect("placement should fit");
        assert!(!BorderClassifier::default().is_valid_border_state(&placed));
    }

    #[test]
    fn test_border_state_rejects_bad_left_column() {
        let canvas = Canvas::blank(4, 12);
        let placed = canvas.with_tile(&tile(&["═╗", "abc║"]), 0, 0).expect("placement should fit");
        assert!(!BorderClassifier::default().is_valid_border_state(&placed));
    }

    #[test]
    fn test_border_state_respects_custom_vocabulary() {
        let glyphs = BorderGlyphSets {
            top: "#".to_owned(),
            bottom: "#".to_owned(),
            left: "#".to_owned(),
            right: "#".to_owned(),
        };
        let canvas = Canvas::blank(2, 4);
        let placed = canvas.with_tile(&tile(&["##", "##"]), 0, 0).expect("placement should fit");
        assert!(BorderClassifier::new(glyphs).is_valid_border_state(&placed));
        assert!(!BorderClassifier::default().is_valid_border_state(&placed));
    }
}
