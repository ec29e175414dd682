use core_style::Color;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color value is empty")]
    Empty,
    #[error("invalid hex color `{0}` (expected #rgb or #rrggbb)")]
    InvalidHex(String),
    #[error("unknown color name `{0}`")]
    UnknownName(String),
}

/// Parse `#rrggbb`, `#rgb`, or a crossterm color name (`red`, `dark_grey`,
/// `reset`, ...).
pub fn parse_color(raw: &str) -> Result<Color, ColorError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(value.to_string()));
    }
    if value.eq_ignore_ascii_case("reset") || value.eq_ignore_ascii_case("none") {
        return Ok(Color::Reset);
    }
    Color::try_from(value).map_err(|_| ColorError::UnknownName(value.to_string()))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb {
            r: channel(&hex[0..2])?,
            g: channel(&hex[2..4])?,
            b: channel(&hex[4..6])?,
        }),
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some(Color::Rgb {
                r: expand(0)?,
                g: expand(1)?,
                b: expand(2)?,
            })
        }
        _ => None,
    }
}
