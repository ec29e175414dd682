#![allow(dead_code)] // Shared across integration test binaries; each uses a subset.

use core_events::{Cmd, Msg};
use core_layout::{Focusable, Model, Sizeable, View};
use core_theme::{Palette, ThemeRef};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

pub fn plain_theme() -> ThemeRef {
    Arc::new(Palette::plain())
}

/// Payload a `Recorder` attaches to the command it returns from `set_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resized(pub u16, pub u16);

/// Sizeable child logging every size it receives.
pub struct Recorder {
    pub sizes: Rc<RefCell<Vec<(u16, u16)>>>,
    pub text: String,
}

impl Recorder {
    pub fn new() -> (Self, Rc<RefCell<Vec<(u16, u16)>>>) {
        let sizes = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                sizes: sizes.clone(),
                text: String::new(),
            },
            sizes,
        )
    }
}

impl View for Recorder {
    fn view(&self) -> String {
        self.text.clone()
    }
    fn as_sizeable(&mut self) -> Option<&mut dyn Sizeable> {
        Some(self)
    }
}

impl Sizeable for Recorder {
    fn set_size(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.sizes.borrow_mut().push((width, height));
        Some(Cmd::msg(Msg::custom(Resized(width, height))))
    }
    fn size(&self) -> (u16, u16) {
        self.sizes.borrow().last().copied().unwrap_or((0, 0))
    }
}

/// Marker payload returned by `Switch` commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note(pub &'static str);

/// Focusable + model child whose state is observable through shared cells.
pub struct Switch {
    pub focused: Rc<RefCell<bool>>,
    pub seen: Rc<RefCell<Vec<&'static str>>>,
}

impl Switch {
    pub fn new() -> (Self, Rc<RefCell<bool>>, Rc<RefCell<Vec<&'static str>>>) {
        let focused = Rc::new(RefCell::new(false));
        let seen = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                focused: focused.clone(),
                seen: seen.clone(),
            },
            focused,
            seen,
        )
    }
}

impl View for Switch {
    fn view(&self) -> String {
        if *self.focused.borrow() {
            "on".to_string()
        } else {
            "off".to_string()
        }
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

impl Focusable for Switch {
    fn focus(&mut self) -> Option<Cmd> {
        *self.focused.borrow_mut() = true;
        Some(Cmd::msg(Msg::custom(Note("focused"))))
    }
    fn blur(&mut self) -> Option<Cmd> {
        *self.focused.borrow_mut() = false;
        Some(Cmd::msg(Msg::custom(Note("blurred"))))
    }
    fn is_focused(&self) -> bool {
        *self.focused.borrow()
    }
}

impl Model for Switch {
    fn init(&mut self) -> Option<Cmd> {
        self.seen.borrow_mut().push("init");
        Some(Cmd::msg(Msg::custom(Note("ready"))))
    }
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        self.seen.borrow_mut().push(msg.kind());
        match msg {
            Msg::Tick => Some(Cmd::msg(Msg::custom(Note("ticked")))),
            _ => None,
        }
    }
}

/// Run a command and return its `T` payload, if any.
pub fn payload<T: Clone + 'static>(cmd: Option<Cmd>) -> Option<T> {
    cmd.and_then(Cmd::run)
        .and_then(|m| m.downcast_ref::<T>().cloned())
}
