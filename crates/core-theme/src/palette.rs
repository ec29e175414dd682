use crate::Theme;
use core_style::Color;

/// Concrete theme: a name plus the three container colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    pub background: Color,
    pub primary: Color,
    pub border: Color,
}

impl Palette {
    /// Dark default palette.
    pub fn opencode() -> Self {
        Self {
            name: "opencode".to_string(),
            background: Color::Rgb {
                r: 0x0a,
                g: 0x0a,
                b: 0x0a,
            },
            primary: Color::Rgb {
                r: 0xfa,
                g: 0xb2,
                b: 0x83,
            },
            border: Color::Rgb {
                r: 0x4b,
                g: 0x4c,
                b: 0x5c,
            },
        }
    }

    /// No colors at all; renders plain text.
    pub fn plain() -> Self {
        Self {
            name: "plain".to_string(),
            background: Color::Reset,
            primary: Color::Reset,
            border: Color::Reset,
        }
    }

    /// Built-in palette by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "opencode" => Some(Self::opencode()),
            "plain" => Some(Self::plain()),
            _ => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::opencode()
    }
}

impl Theme for Palette {
    fn name(&self) -> &str {
        &self.name
    }
    fn background(&self) -> Color {
        self.background
    }
    fn primary(&self) -> Color {
        self.primary
    }
    fn border(&self) -> Color {
        self.border
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(Palette::by_name("OpenCode"), Some(Palette::opencode()));
        assert_eq!(Palette::by_name("plain"), Some(Palette::plain()));
        assert!(Palette::by_name("solarized").is_none());
    }

    #[test]
    fn focused_and_idle_border_colors_differ() {
        let p = Palette::opencode();
        assert_ne!(p.primary(), p.border());
    }
}
