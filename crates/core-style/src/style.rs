//! `BoxStyle`: box description and renderer.
//!
//! Geometry semantics:
//! * `width` covers content plus horizontal padding, borders excluded. Unset
//!   width sizes the box to the widest body line.
//! * `height` covers content plus vertical padding, borders excluded. When set
//!   the padded block is extended with blank rows or cut to exactly that many
//!   rows. Unset height keeps the natural row count.
//! * Body lines longer than the content width are truncated; there is no
//!   wrapping.
//! * Corners are drawn only where both adjacent sides carry a border.
//! * Carriage returns are dropped and tabs become `TAB_WIDTH` spaces before
//!   measuring, so control characters never reach the terminal.

use crate::ansi::{RESET, sequence};
use crate::width::{display_width, pad_right, truncate};
use crate::{Border, Padding, Sides};
use crossterm::style::{Color, SetBackgroundColor, SetForegroundColor};

pub const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxStyle {
    background: Color,
    border: Border,
    sides: Sides,
    border_fg: Color,
    border_bg: Color,
    width: Option<u16>,
    height: Option<u16>,
    padding: Padding,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxStyle {
    pub fn new() -> Self {
        Self {
            background: Color::Reset,
            border: Border::normal(),
            sides: Sides::empty(),
            border_fg: Color::Reset,
            border_bg: Color::Reset,
            width: None,
            height: None,
            padding: Padding::ZERO,
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn border(mut self, border: Border, sides: Sides) -> Self {
        self.border = border;
        self.sides = sides;
        self
    }

    pub fn border_foreground(mut self, color: Color) -> Self {
        self.border_fg = color;
        self
    }

    pub fn border_background(mut self, color: Color) -> Self {
        self.border_bg = color;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn sides(&self) -> Sides {
        self.sides
    }

    pub fn border_colors(&self) -> (Color, Color) {
        (self.border_fg, self.border_bg)
    }

    /// Compose the box around `body`.
    pub fn render(&self, body: &str) -> String {
        let body = sanitize(body);
        let lines: Vec<&str> = body.split('\n').collect();
        let pad = self.padding;
        let (pad_l, pad_r) = (pad.left as usize, pad.right as usize);
        let inner = match self.width {
            Some(w) => (w as usize).saturating_sub(pad_l + pad_r),
            None => lines.iter().map(|l| display_width(l)).max().unwrap_or(0),
        };
        let block_width = inner + pad_l + pad_r;
        let blank = " ".repeat(block_width);

        let mut block: Vec<String> = Vec::with_capacity(lines.len() + pad.vertical() as usize);
        block.extend(std::iter::repeat_n(blank.clone(), pad.top as usize));
        for line in &lines {
            let mut row = String::with_capacity(block_width + line.len());
            row.push_str(&" ".repeat(pad_l));
            row.push_str(&pad_right(&truncate(line, inner), inner));
            row.push_str(&" ".repeat(pad_r));
            block.push(row);
        }
        block.extend(std::iter::repeat_n(blank.clone(), pad.bottom as usize));
        if let Some(h) = self.height {
            block.resize(h as usize, blank);
        }

        tracing::trace!(
            target: "style",
            block_width,
            rows = block.len(),
            sides = self.sides.bits(),
            "box_render"
        );

        let block = block
            .iter()
            .map(|row| paint(row, Color::Reset, self.background));
        if self.sides.is_empty() {
            return block.collect::<Vec<_>>().join("\n");
        }
        self.frame(block, block_width).join("\n")
    }

    fn frame(&self, block: impl Iterator<Item = String>, block_width: usize) -> Vec<String> {
        let b = &self.border;
        let s = self.sides;
        let edge = |glyph: &str| paint(glyph, self.border_fg, self.border_bg);
        let horizontal = |left: &str, fill: &str, right: &str| {
            let mut line = String::new();
            if s.contains(Sides::LEFT) {
                line.push_str(left);
            }
            line.push_str(&fill.repeat(block_width));
            if s.contains(Sides::RIGHT) {
                line.push_str(right);
            }
            paint(&line, self.border_fg, self.border_bg)
        };

        let mut out = Vec::new();
        if s.contains(Sides::TOP) {
            out.push(horizontal(b.top_left, b.top, b.top_right));
        }
        let left = s.contains(Sides::LEFT).then(|| edge(b.left));
        let right = s.contains(Sides::RIGHT).then(|| edge(b.right));
        for row in block {
            let mut line = String::with_capacity(row.len() + 16);
            if let Some(l) = &left {
                line.push_str(l);
            }
            line.push_str(&row);
            if let Some(r) = &right {
                line.push_str(r);
            }
            out.push(line);
        }
        if s.contains(Sides::BOTTOM) {
            out.push(horizontal(b.bottom_left, b.bottom, b.bottom_right));
        }
        out
    }
}

fn sanitize(body: &str) -> String {
    body.replace('\r', "").replace('\t', &" ".repeat(TAB_WIDTH))
}

/// Wrap `text` in the given colors. Resets inside `text` re-open the colors so
/// nested styled content does not clear the surrounding background.
fn paint(text: &str, fg: Color, bg: Color) -> String {
    if fg == Color::Reset && bg == Color::Reset {
        return text.to_string();
    }
    let mut open = String::new();
    if fg != Color::Reset {
        open.push_str(&sequence(SetForegroundColor(fg)));
    }
    if bg != Color::Reset {
        open.push_str(&sequence(SetBackgroundColor(bg)));
    }
    let reopened = text.replace(RESET, &format!("{RESET}{open}"));
    format!("{open}{reopened}{RESET}")
}
