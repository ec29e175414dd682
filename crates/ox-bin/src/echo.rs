//! Demo leaf: static text plus a status line showing focus and the last key.

use crate::keys::describe;
use core_events::{Cmd, KeyCode, Msg};
use core_layout::{Focusable, Model, Sizeable, View};
use tracing::debug;

#[derive(Debug, Default)]
pub struct Echo {
    text: String,
    last_key: Option<String>,
    focused: bool,
    width: u16,
    height: u16,
}

impl Echo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    fn status(&self) -> String {
        let marker = if self.focused { "● focused" } else { "○ idle" };
        match &self.last_key {
            Some(key) => format!("{marker}  last key: {key}"),
            None => marker.to_string(),
        }
    }
}

impl View for Echo {
    fn view(&self) -> String {
        if self.text.is_empty() {
            return self.status();
        }
        format!("{}\n\n{}", self.text, self.status())
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

impl Sizeable for Echo {
    fn set_size(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        None
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}

impl Focusable for Echo {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        Some(Cmd::msg(Msg::FocusGained))
    }

    fn blur(&mut self) -> Option<Cmd> {
        self.focused = false;
        Some(Cmd::msg(Msg::FocusLost))
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl Model for Echo {
    fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        match msg {
            Msg::Key(key) if key.code == KeyCode::Backspace => {
                self.last_key = None;
            }
            Msg::Key(key) => {
                self.last_key = Some(describe(key));
            }
            Msg::FocusGained | Msg::FocusLost => {
                debug!(target: "runtime", focused = self.focused, "echo_focus_changed");
            }
            _ => {}
        }
        None
    }
}
