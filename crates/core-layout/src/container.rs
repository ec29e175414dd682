//! `Container`: one box around one child.
//!
//! Box model (per axis):
//!
//! ```text
//! outer width ──► effective width = min(width, max_width) if max_width > 0
//!             ──► content width   = effective - (left + right padding)
//!                                             - (left border? 1) - (right border? 1)
//! outer height ─► content height  = height - (top + bottom padding)
//!                                          - (top border? 1) - (bottom border? 1)
//! ```
//!
//! All subtraction saturates at zero. The content size is pushed to the child
//! on every `set_size` when the child is sizeable; rendering recomputes the
//! same geometry from stored state and hands it to `core_style::BoxStyle`.
//!
//! Focus is tracked twice: the container remembers its own flag (drives border
//! color, answers `is_focused` for children without focus support) while a
//! focusable child keeps its own state, which then becomes the answer to
//! `is_focused`.

use crate::capability::{Alignable, Focusable, Model, Positionable, Sizeable, View};
use crate::options::{ContainerConfig, ContainerOption};
use core_events::{Cmd, Msg};
use core_style::{Border, BoxStyle, Padding, Position, Sides};
use tracing::trace;

pub struct Container {
    width: u16,
    height: u16,
    x: u16,
    y: u16,
    content: Box<dyn View>,
    config: ContainerConfig,
    focused: bool,
}

impl Container {
    pub fn new<V, I>(content: V, options: I) -> Self
    where
        V: View + 'static,
        I: IntoIterator<Item = ContainerOption>,
    {
        Self::from_boxed(Box::new(content), options)
    }

    pub fn from_boxed<I>(content: Box<dyn View>, options: I) -> Self
    where
        I: IntoIterator<Item = ContainerOption>,
    {
        Self {
            width: 0,
            height: 0,
            x: 0,
            y: 0,
            content,
            config: ContainerConfig::apply(options),
            focused: false,
        }
    }

    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    pub fn padding(&self) -> Padding {
        self.config.padding
    }

    pub fn border_sides(&self) -> Sides {
        self.config.border_sides
    }

    pub fn border(&self) -> Border {
        self.config.border
    }

    pub fn content(&self) -> &dyn View {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> &mut dyn View {
        self.content.as_mut()
    }

    /// Outer width after the max-width clamp.
    pub fn effective_width(&self) -> u16 {
        match self.config.max_width {
            0 => self.width,
            max => self.width.min(max),
        }
    }

    /// Cells taken by padding and borders as (horizontal, vertical).
    pub fn chrome(&self) -> (u16, u16) {
        let sides = self.config.border_sides;
        let pad = self.config.padding;
        (
            pad.horizontal().saturating_add(sides.horizontal_cells()),
            pad.vertical().saturating_add(sides.vertical_cells()),
        )
    }

    /// Size available to the child for the current outer geometry.
    pub fn content_size(&self) -> (u16, u16) {
        let (horizontal, vertical) = self.chrome();
        (
            self.effective_width().saturating_sub(horizontal),
            self.height.saturating_sub(vertical),
        )
    }
}

impl View for Container {
    fn view(&self) -> String {
        let theme = self
            .config
            .theme
            .clone()
            .unwrap_or_else(core_theme::current);
        let sides = self.config.border_sides;
        let mut width = self.effective_width();
        let mut height = self.height;
        let mut style = BoxStyle::new().background(theme.background());

        if !sides.is_empty() {
            width = width.saturating_sub(sides.horizontal_cells());
            height = height.saturating_sub(sides.vertical_cells());
            let border_fg = if self.focused {
                theme.primary()
            } else {
                theme.border()
            };
            style = style
                .border(self.config.border, sides)
                .border_background(theme.background())
                .border_foreground(border_fg);
        }

        style
            .width(width)
            .height(height)
            .padding(self.config.padding)
            .render(&self.content.view())
    }

    fn as_sizeable(&mut self) -> Option<&mut dyn Sizeable> {
        Some(self)
    }

    fn as_focusable(&self) -> Option<&dyn Focusable> {
        Some(self)
    }

    fn as_focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        Some(self)
    }

    fn as_model(&mut self) -> Option<&mut dyn Model> {
        Some(self)
    }
}

impl Sizeable for Container {
    fn set_size(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        let (content_width, content_height) = self.content_size();
        let child = self.content.as_sizeable()?;
        trace!(
            target: "layout.container",
            width,
            height,
            content_width,
            content_height,
            "content_resized"
        );
        child.set_size(content_width, content_height)
    }

    /// Reports `min(width, max_width)` even when no cap is set, so an uncapped
    /// container answers width 0. Use `effective_width` for the clamp-aware
    /// value.
    fn size(&self) -> (u16, u16) {
        (self.width.min(self.config.max_width), self.height)
    }
}

impl Focusable for Container {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        self.content.as_focusable_mut()?.focus()
    }

    fn blur(&mut self) -> Option<Cmd> {
        self.focused = false;
        self.content.as_focusable_mut()?.blur()
    }

    fn is_focused(&self) -> bool {
        match self.content.as_focusable() {
            Some(child) => child.is_focused(),
            None => self.focused,
        }
    }
}

impl Alignable for Container {
    fn alignment(&self) -> Position {
        self.config.align
    }

    fn max_width(&self) -> u16 {
        self.config.max_width
    }
}

impl Positionable for Container {
    fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    fn set_position(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }
}

impl Model for Container {
    fn init(&mut self) -> Option<Cmd> {
        self.content.as_model()?.init()
    }

    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        match self.content.as_model() {
            Some(child) => child.update(msg),
            None => {
                trace!(target: "layout.container", kind = msg.kind(), "msg_dropped");
                None
            }
        }
    }
}
