//! Construction-time container options.
//!
//! An option is a boxed mutator over `ContainerConfig`. `Container::new`
//! applies them in order to a default configuration, so when two options touch
//! the same field the later one wins. Nothing is validated here; degenerate
//! values only show up as zero-clamped geometry later.

use core_style::{Border, Padding, Position, Sides};
use core_theme::ThemeRef;
use std::fmt;

pub type ContainerOption = Box<dyn FnOnce(&mut ContainerConfig)>;

/// Everything fixed at construction time.
#[derive(Clone, Default)]
pub struct ContainerConfig {
    pub padding: Padding,
    pub border_sides: Sides,
    pub border: Border,
    /// 0 means no cap.
    pub max_width: u16,
    pub align: Position,
    /// Overrides `core_theme::current()` when set.
    pub theme: Option<ThemeRef>,
}

impl ContainerConfig {
    pub fn apply<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ContainerOption>,
    {
        let mut config = Self::default();
        for option in options {
            option(&mut config);
        }
        config
    }
}

impl fmt::Debug for ContainerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerConfig")
            .field("padding", &self.padding)
            .field("border_sides", &self.border_sides)
            .field("border", &self.border)
            .field("max_width", &self.max_width)
            .field("align", &self.align)
            .field("theme", &self.theme.as_ref().map(|t| t.name().to_string()))
            .finish()
    }
}

pub fn with_padding(top: u16, right: u16, bottom: u16, left: u16) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| c.padding = Padding::new(top, right, bottom, left))
}

pub fn with_padding_all(padding: u16) -> ContainerOption {
    with_padding(padding, padding, padding, padding)
}

/// Left and right padding only.
pub fn with_padding_horizontal(padding: u16) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| {
        c.padding.left = padding;
        c.padding.right = padding;
    })
}

/// Top and bottom padding only.
pub fn with_padding_vertical(padding: u16) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| {
        c.padding.top = padding;
        c.padding.bottom = padding;
    })
}

pub fn with_border(top: bool, right: bool, bottom: bool, left: bool) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| c.border_sides = Sides::new(top, right, bottom, left))
}

pub fn with_border_all() -> ContainerOption {
    with_border(true, true, true, true)
}

/// Horizontal rules: top and bottom borders.
pub fn with_border_horizontal() -> ContainerOption {
    with_border(true, false, true, false)
}

/// Vertical rules: left and right borders.
pub fn with_border_vertical() -> ContainerOption {
    with_border(false, true, false, true)
}

pub fn with_border_style(border: Border) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| c.border = border)
}

pub fn with_rounded_border() -> ContainerOption {
    with_border_style(Border::rounded())
}

pub fn with_thick_border() -> ContainerOption {
    with_border_style(Border::thick())
}

pub fn with_double_border() -> ContainerOption {
    with_border_style(Border::double())
}

pub fn with_max_width(max_width: u16) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| c.max_width = max_width)
}

pub fn with_align(align: Position) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| c.align = align)
}

pub fn with_align_left() -> ContainerOption {
    with_align(Position::Left)
}

pub fn with_align_center() -> ContainerOption {
    with_align(Position::Center)
}

pub fn with_align_right() -> ContainerOption {
    with_align(Position::Right)
}

pub fn with_theme(theme: ThemeRef) -> ContainerOption {
    Box::new(move |c: &mut ContainerConfig| c.theme = Some(theme))
}
