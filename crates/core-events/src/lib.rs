//! Core message and command types shared by views, containers and the runtime.
//!
//! The layout core never interprets messages itself. It forwards a `Msg` to a
//! child that implements the model capability and hands back whatever `Cmd`
//! the child produced, untouched. Keeping both types in this leaf crate lets
//! views, the container and the binary agree on the contract without depending
//! on each other.
//!
//! Invariants:
//! * A `Cmd` runs at most once (`FnOnce`); running it yields zero or one `Msg`.
//! * `Cmd::batch` never wraps an empty set: no commands collapse to `None` and a
//!   single command is returned as-is.
//! * `Msg::Custom` payloads are opaque to every layer except the one that
//!   created them; consumers recover them with `Msg::downcast_ref`.

use std::any::Any;
use std::fmt;

/// One input event or application message delivered by the control loop.
pub enum Msg {
    Key(KeyEvent),
    /// Terminal resize (columns, rows).
    Resize(u16, u16),
    /// Terminal window became active.
    FocusGained,
    /// Terminal window deactivated.
    FocusLost,
    /// Periodic tick driven by the runtime.
    Tick,
    /// Request for the control loop to stop.
    Quit,
    /// Several follow-up commands produced together; the runtime runs each.
    Batch(Vec<Cmd>),
    /// Application-defined payload.
    Custom(Box<dyn Any + Send>),
}

impl Msg {
    pub fn custom<T: Any + Send>(value: T) -> Self {
        Msg::Custom(Box::new(value))
    }

    /// Borrow a `Custom` payload as `T` when the types match.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Msg::Custom(payload) => payload.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Short stable name used in log fields (payloads are never logged).
    pub fn kind(&self) -> &'static str {
        match self {
            Msg::Key(_) => "key",
            Msg::Resize(..) => "resize",
            Msg::FocusGained => "focus_gained",
            Msg::FocusLost => "focus_lost",
            Msg::Tick => "tick",
            Msg::Quit => "quit",
            Msg::Batch(_) => "batch",
            Msg::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Msg::Key(k) => f.debug_tuple("Key").field(k).finish(),
            Msg::Resize(w, h) => f.debug_tuple("Resize").field(w).field(h).finish(),
            Msg::Batch(cmds) => f.debug_tuple("Batch").field(&cmds.len()).finish(),
            other => f.write_str(other.kind()),
        }
    }
}

/// Deferred follow-up action. Views return `Option<Cmd>`; `None` means no
/// follow-up.
pub struct Cmd(Box<dyn FnOnce() -> Option<Msg> + Send>);

impl Cmd {
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce() -> Option<Msg> + Send + 'static,
    {
        Cmd(Box::new(f))
    }

    /// Command that immediately yields `msg`.
    pub fn msg(msg: Msg) -> Self {
        Cmd::new(move || Some(msg))
    }

    pub fn quit() -> Self {
        Cmd::new(|| Some(Msg::Quit))
    }

    /// Combine optional commands. Empty input yields `None`, a single command is
    /// passed through unchanged.
    pub fn batch<I>(cmds: I) -> Option<Cmd>
    where
        I: IntoIterator<Item = Option<Cmd>>,
    {
        let mut cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            n => {
                tracing::trace!(target: "events", commands = n, "batch");
                Some(Cmd::new(move || Some(Msg::Batch(cmds))))
            }
        }
    }

    pub fn run(self) -> Option<Msg> {
        (self.0)()
    }
}

impl fmt::Debug for Cmd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Cmd(..)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }
}

/// Normalized logical keys consumed by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Esc,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        const CTRL = 0b0000_0001;
        const ALT  = 0b0000_0010;
        const SHIFT= 0b0000_0100;
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}{:?}", self.code, self.mods)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_event_display() {
        let k = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CTRL);
        let s = format!("{}", k);
        assert!(s.contains("Char"));
    }

    #[test]
    fn cmd_msg_yields_message_once() {
        let cmd = Cmd::msg(Msg::Tick);
        assert!(matches!(cmd.run(), Some(Msg::Tick)));
    }

    #[test]
    fn batch_of_nothing_is_none() {
        assert!(Cmd::batch([None, None]).is_none());
        assert!(Cmd::batch(Vec::new()).is_none());
    }

    #[test]
    fn batch_of_one_passes_through() {
        let cmd = Cmd::batch([None, Some(Cmd::quit())]).expect("single command");
        assert!(matches!(cmd.run(), Some(Msg::Quit)));
    }

    #[test]
    fn batch_of_many_wraps_all() {
        let cmd = Cmd::batch([Some(Cmd::quit()), Some(Cmd::msg(Msg::Tick))]).expect("batch");
        match cmd.run() {
            Some(Msg::Batch(inner)) => {
                assert_eq!(inner.len(), 2);
                let kinds: Vec<_> = inner
                    .into_iter()
                    .filter_map(Cmd::run)
                    .map(|m| m.kind())
                    .collect();
                assert_eq!(kinds, vec!["quit", "tick"]);
            }
            other => panic!("expected batch, got {:?}", other),
        }
    }

    #[test]
    fn custom_payload_downcasts() {
        #[derive(Debug, PartialEq)]
        struct Selected(usize);
        let msg = Msg::custom(Selected(3));
        assert_eq!(msg.downcast_ref::<Selected>(), Some(&Selected(3)));
        assert!(msg.downcast_ref::<String>().is_none());
        assert!(Msg::Tick.downcast_ref::<Selected>().is_none());
    }
}
