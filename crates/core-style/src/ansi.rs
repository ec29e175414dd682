//! Minimal ANSI escape tokenizer.
//!
//! Rendered children may already carry color sequences (a nested container
//! paints its own border and background). Width math must skip those bytes and
//! truncation must keep them intact, so the body is split into escape and text
//! pieces before any measuring happens.
//!
//! Recognized forms: CSI (`ESC [ ... final`), OSC (`ESC ] ... BEL` or
//! `ESC ] ... ESC \`) and two-byte `ESC x` sequences. An unterminated sequence
//! swallows the rest of the input rather than leaking bytes into the text.

use crossterm::Command;

pub const ESC: char = '\x1b';
/// SGR reset (`ResetColor` / `SetAttribute(Reset)` both render to this).
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece<'a> {
    Escape(&'a str),
    Text(&'a str),
}

pub struct Pieces<'a> {
    rest: &'a str,
}

pub fn pieces(s: &str) -> Pieces<'_> {
    Pieces { rest: s }
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        if self.rest.starts_with(ESC) {
            let len = escape_len(self.rest);
            let (head, tail) = self.rest.split_at(len);
            self.rest = tail;
            return Some(Piece::Escape(head));
        }
        let end = self.rest.find(ESC).unwrap_or(self.rest.len());
        let (head, tail) = self.rest.split_at(end);
        self.rest = tail;
        Some(Piece::Text(head))
    }
}

fn escape_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.get(1) {
        Some(b'[') => bytes
            .iter()
            .enumerate()
            .skip(2)
            .find(|(_, b)| (0x40..=0x7e).contains(*b))
            .map_or(bytes.len(), |(i, _)| i + 1),
        Some(b']') => {
            let mut i = 2;
            while i < bytes.len() {
                if bytes[i] == 0x07 {
                    return i + 1;
                }
                if bytes[i] == 0x1b && bytes.get(i + 1) == Some(&b'\\') {
                    return i + 2;
                }
                i += 1;
            }
            bytes.len()
        }
        Some(_) => s[1..].chars().next().map_or(1, |c| 1 + c.len_utf8()),
        None => 1,
    }
}

/// Render a crossterm command to its escape sequence.
pub fn sequence(command: impl Command) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = command.write_ansi(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::{Color, SetForegroundColor};

    #[test]
    fn splits_csi_and_text() {
        let s = "a\x1b[31mred\x1b[0m!";
        let got: Vec<_> = pieces(s).collect();
        assert_eq!(
            got,
            vec![
                Piece::Text("a"),
                Piece::Escape("\x1b[31m"),
                Piece::Text("red"),
                Piece::Escape("\x1b[0m"),
                Piece::Text("!"),
            ]
        );
    }

    #[test]
    fn osc_terminated_by_bel_and_st() {
        let s = "\x1b]0;title\x07x\x1b]8;;url\x1b\\y";
        let got: Vec<_> = pieces(s).collect();
        assert_eq!(got[0], Piece::Escape("\x1b]0;title\x07"));
        assert_eq!(got[1], Piece::Text("x"));
        assert_eq!(got[2], Piece::Escape("\x1b]8;;url\x1b\\"));
        assert_eq!(got[3], Piece::Text("y"));
    }

    #[test]
    fn unterminated_sequence_consumes_rest() {
        let got: Vec<_> = pieces("ok\x1b[38;5").collect();
        assert_eq!(got, vec![Piece::Text("ok"), Piece::Escape("\x1b[38;5")]);
    }

    #[test]
    fn command_sequence_is_csi() {
        let seq = sequence(SetForegroundColor(Color::Red));
        assert!(seq.starts_with("\x1b["));
        assert!(seq.ends_with('m'));
        assert_eq!(pieces(&seq).count(), 1);
    }
}
