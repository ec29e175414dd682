/// Padding in cells, CSS order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Padding {
    pub const ZERO: Padding = Padding::all(0);

    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(padding: u16) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    /// Left + right.
    pub fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Top + bottom.
    pub fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// Alignment token. Advisory for containers; honored by `place_horizontal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Position {
    #[default]
    Left,
    Center,
    Right,
}
