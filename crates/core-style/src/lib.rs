//! Box styling: turns a box description plus a body string into rendered
//! terminal text.
//!
//! This crate is the styling collaborator of the layout core. A container only
//! decides geometry (width, height, padding, which border sides exist and in
//! which color); composing the character grid happens here.
//!
//! Exposed Components:
//! - `BoxStyle`: fluent box description with `render(body)`.
//! - `Border` / `Sides`: glyph sets and per-side enable flags.
//! - `Padding` / `Position`: padding amounts and alignment tokens.
//! - `width`: ANSI-aware display width, truncation and padding helpers.
//! - `ansi`: escape-sequence tokenizer shared by the width helpers.
//! - `place_horizontal`: aligns a rendered block inside a wider area.
//!
//! Invariants:
//! - Every line of a rendered box has the same display width.
//! - When both width and height are set the rendered block (borders included)
//!   occupies exactly `width + border columns` by `height + border rows` cells,
//!   unless horizontal padding alone exceeds `width`. The content width then
//!   clamps to zero and each row is `left + right padding + border columns`
//!   wide.
//! - Body text is rendered without control characters: `\r` is dropped and
//!   `\t` expands to `TAB_WIDTH` spaces.
//! - `Color::Reset` means "no color": no escape sequence is emitted for it, so
//!   a box rendered with reset colors is plain text.

pub mod ansi;
mod border;
mod geometry;
mod place;
mod style;
pub mod width;

pub use border::{Border, Sides};
pub use crossterm::style::Color;
pub use geometry::{Padding, Position};
pub use place::place_horizontal;
pub use style::{BoxStyle, TAB_WIDTH};
pub use width::{display_width, strip_ansi, truncate};
