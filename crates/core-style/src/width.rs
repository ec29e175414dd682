//! Display width helpers (terminal cells).
//!
//! All width decisions in the styling layer flow through `egc_width`, which
//! measures one extended grapheme cluster. Escape sequences are zero width and
//! are never split.
//!
//! Invariants:
//! - `display_width(truncate(s, n)) <= n`.
//! - `truncate` never splits a grapheme cluster; a wide cluster that would
//!   straddle the limit is dropped entirely.
//! - Truncating styled text that was cut short appends an SGR reset so color
//!   does not bleed into the padding that follows.

use crate::ansi::{Piece, RESET, pieces};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ZWJ: char = '\u{200D}';

fn is_extended_pictographic(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c) || ('\u{2600}'..='\u{27BF}').contains(&c)
}

/// Width of a single grapheme cluster. ZWJ emoji sequences are forced to two
/// cells; nothing measures wider than two.
pub fn egc_width(egc: &str) -> usize {
    if egc.is_empty() {
        return 0;
    }
    if egc.contains(ZWJ) && egc.chars().any(is_extended_pictographic) {
        return 2;
    }
    UnicodeWidthStr::width(egc).min(2)
}

/// Visible width of `s`, ignoring escape sequences.
pub fn display_width(s: &str) -> usize {
    pieces(s)
        .map(|piece| match piece {
            Piece::Escape(_) => 0,
            Piece::Text(t) => t.graphemes(true).map(egc_width).sum(),
        })
        .sum()
}

/// Cut `s` to at most `max` visible cells, keeping escape sequences seen
/// before the cut.
pub fn truncate(s: &str, max: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut used = 0usize;
    let mut styled = false;
    let mut cut = false;
    'pieces: for piece in pieces(s) {
        match piece {
            Piece::Escape(seq) => {
                out.push_str(seq);
                styled = true;
            }
            Piece::Text(text) => {
                for g in text.graphemes(true) {
                    let w = egc_width(g);
                    if used + w > max {
                        cut = true;
                        break 'pieces;
                    }
                    used += w;
                    out.push_str(g);
                }
            }
        }
    }
    if cut && styled {
        out.push_str(RESET);
    }
    out
}

/// Right-pad `s` with spaces up to `width` visible cells. Wider input is
/// returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

/// Text with every escape sequence removed.
pub fn strip_ansi(s: &str) -> String {
    pieces(s)
        .filter_map(|piece| match piece {
            Piece::Text(t) => Some(t),
            Piece::Escape(_) => None,
        })
        .collect()
}
