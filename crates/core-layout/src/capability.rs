//! Capability contracts between a container, its child, and its parent.
//!
//! Every child must render (`View`). Everything else is optional and probed
//! at the call site through the `as_*` methods, which return `None` unless an
//! implementor opts in by returning `Some(self)`. There is no base widget type
//! to inherit from; a child is exactly the set of capabilities it exposes.

use core_events::{Cmd, Msg};
use core_style::Position;

/// Renderable element. The only mandatory capability.
pub trait View {
    /// Current visual representation.
    fn view(&self) -> String;

    fn as_sizeable(&mut self) -> Option<&mut dyn Sizeable> {
        None
    }

    fn as_focusable(&self) -> Option<&dyn Focusable> {
        None
    }

    fn as_focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        None
    }

    fn as_model(&mut self) -> Option<&mut dyn Model> {
        None
    }
}

/// Accepts and reports a size in cells.
pub trait Sizeable {
    fn set_size(&mut self, width: u16, height: u16) -> Option<Cmd>;
    fn size(&self) -> (u16, u16);
}

pub trait Focusable {
    fn focus(&mut self) -> Option<Cmd>;
    fn blur(&mut self) -> Option<Cmd>;
    fn is_focused(&self) -> bool;
}

/// Alignment preference and width cap, read by a parent compositor.
pub trait Alignable {
    fn alignment(&self) -> Position;
    /// 0 means no cap.
    fn max_width(&self) -> u16;
}

/// Advisory placement recorded by a parent compositor.
pub trait Positionable {
    fn position(&self) -> (u16, u16);
    fn set_position(&mut self, x: u16, y: u16);
}

/// Element driven by the control loop. Updates mutate the element in place.
pub trait Model {
    fn init(&mut self) -> Option<Cmd> {
        None
    }
    fn update(&mut self, msg: &Msg) -> Option<Cmd>;
}

impl View for String {
    fn view(&self) -> String {
        self.clone()
    }
}

impl View for &'static str {
    fn view(&self) -> String {
        (*self).to_string()
    }
}

impl View for Box<dyn View> {
    fn view(&self) -> String {
        (**self).view()
    }
    fn as_sizeable(&mut self) -> Option<&mut dyn Sizeable> {
        (**self).as_sizeable()
    }
    fn as_focusable(&self) -> Option<&dyn Focusable> {
        (**self).as_focusable()
    }
    fn as_focusable_mut(&mut self) -> Option<&mut dyn Focusable> {
        (**self).as_focusable_mut()
    }
    fn as_model(&mut self) -> Option<&mut dyn Model> {
        (**self).as_model()
    }
}
