//! Border glyph sets and side flags.

/// Glyphs used to draw a box outline. Each glyph must be one cell wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Border {
    pub top: &'static str,
    pub bottom: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
}

impl Border {
    pub const fn normal() -> Self {
        Self {
            top: "─",
            bottom: "─",
            left: "│",
            right: "│",
            top_left: "┌",
            top_right: "┐",
            bottom_left: "└",
            bottom_right: "┘",
        }
    }

    pub const fn rounded() -> Self {
        Self {
            top_left: "╭",
            top_right: "╮",
            bottom_left: "╰",
            bottom_right: "╯",
            ..Self::normal()
        }
    }

    pub const fn thick() -> Self {
        Self {
            top: "━",
            bottom: "━",
            left: "┃",
            right: "┃",
            top_left: "┏",
            top_right: "┓",
            bottom_left: "┗",
            bottom_right: "┛",
        }
    }

    pub const fn double() -> Self {
        Self {
            top: "═",
            bottom: "═",
            left: "║",
            right: "║",
            top_left: "╔",
            top_right: "╗",
            bottom_left: "╚",
            bottom_right: "╝",
        }
    }

    /// Occupies border cells without drawing anything visible.
    pub const fn hidden() -> Self {
        Self {
            top: " ",
            bottom: " ",
            left: " ",
            right: " ",
            top_left: " ",
            top_right: " ",
            bottom_left: " ",
            bottom_right: " ",
        }
    }
}

impl Default for Border {
    fn default() -> Self {
        Self::normal()
    }
}

bitflags::bitflags! {
    /// Which sides of a box carry a border.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Sides: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
        const TOP_BOTTOM = Self::TOP.bits() | Self::BOTTOM.bits();
        const LEFT_RIGHT = Self::LEFT.bits() | Self::RIGHT.bits();
    }
}

impl Sides {
    /// Build from four booleans in CSS order (top, right, bottom, left).
    pub fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        let mut sides = Sides::empty();
        sides.set(Sides::TOP, top);
        sides.set(Sides::RIGHT, right);
        sides.set(Sides::BOTTOM, bottom);
        sides.set(Sides::LEFT, left);
        sides
    }

    /// Columns consumed by the left/right borders (0, 1 or 2).
    pub fn horizontal_cells(self) -> u16 {
        (self & Sides::LEFT_RIGHT).bits().count_ones() as u16
    }

    /// Rows consumed by the top/bottom borders (0, 1 or 2).
    pub fn vertical_cells(self) -> u16 {
        (self & Sides::TOP_BOTTOM).bits().count_ones() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_consumption_per_axis() {
        assert_eq!(Sides::empty().horizontal_cells(), 0);
        assert_eq!(Sides::all().horizontal_cells(), 2);
        assert_eq!(Sides::all().vertical_cells(), 2);
        assert_eq!(Sides::TOP_BOTTOM.horizontal_cells(), 0);
        assert_eq!(Sides::TOP_BOTTOM.vertical_cells(), 2);
        assert_eq!(Sides::LEFT.horizontal_cells(), 1);
        assert_eq!(Sides::new(false, true, true, false).vertical_cells(), 1);
    }

    #[test]
    fn new_maps_css_order() {
        let s = Sides::new(true, false, true, false);
        assert_eq!(s, Sides::TOP_BOTTOM);
        assert_eq!(Sides::new(true, true, true, true), Sides::all());
    }

    #[test]
    fn rounded_only_changes_corners() {
        let n = Border::normal();
        let r = Border::rounded();
        assert_eq!(n.top, r.top);
        assert_eq!(n.left, r.left);
        assert_ne!(n.top_left, r.top_left);
    }
}
