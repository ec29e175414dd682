use crate::capability::{Sizeable, View};
use core_events::Cmd;

/// Static text leaf that remembers the size it was given.
///
/// The label itself never clips; the enclosing box truncates lines to the
/// content width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Label {
    text: String,
    width: u16,
    height: u16,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: 0,
            height: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl View for Label {
    fn view(&self) -> String {
        self.text.clone()
    }

    fn as_sizeable(&mut self) -> Option<&mut dyn Sizeable> {
        Some(self)
    }
}

impl Sizeable for Label {
    fn set_size(&mut self, width: u16, height: u16) -> Option<Cmd> {
        self.width = width;
        self.height = height;
        None
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }
}
