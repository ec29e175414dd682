//! The demo tree and its message pump.
//!
//! The tree is two containers deep: an outer box built from the `[container]`
//! config table around an inner bordered box holding an [`Echo`]. Commands
//! returned by the tree are run synchronously and their messages fed back
//! through `update` until nothing is left or the follow-up cap is hit.

use crate::echo::Echo;
use crate::keys::is_quit;
use core_events::{Cmd, KeyCode, KeyEvent, Msg};
use core_layout::options::{with_border_all, with_padding_horizontal};
use core_layout::{Alignable, Container, ContainerOption, Focusable, Model, Sizeable, View};
use core_style::place_horizontal;
use std::collections::VecDeque;
use tracing::{debug, trace, warn};

const MAX_FOLLOW_UPS: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

pub struct App {
    root: Container,
    width: u16,
    quit: bool,
}

impl App {
    pub fn new(text: &str, outer: Vec<ContainerOption>) -> Self {
        let inner = Container::new(
            Echo::new(text),
            vec![with_border_all(), with_padding_horizontal(1)],
        );
        Self {
            root: Container::new(inner, outer),
            width: 0,
            quit: false,
        }
    }

    #[cfg(test)]
    pub fn root(&self) -> &Container {
        &self.root
    }

    pub fn init(&mut self) -> LoopControl {
        let cmd = self.root.init();
        self.drain(cmd)
    }

    pub fn resize(&mut self, width: u16, height: u16) -> LoopControl {
        self.width = width;
        let cmd = self.root.set_size(width, height);
        debug!(
            target: "runtime",
            width,
            height,
            effective_width = self.root.effective_width(),
            "resize"
        );
        self.drain(cmd)
    }

    pub fn toggle_focus(&mut self) -> LoopControl {
        let cmd = if self.root.is_focused() {
            self.root.blur()
        } else {
            self.root.focus()
        };
        debug!(target: "runtime", focused = self.root.is_focused(), "focus_toggled");
        self.drain(cmd)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoopControl {
        if is_quit(&key) {
            self.quit = true;
            return LoopControl::Quit;
        }
        if key.code == KeyCode::Tab {
            return self.toggle_focus();
        }
        let cmd = self.root.update(&Msg::Key(key));
        self.drain(cmd)
    }

    /// The root view placed across the full width according to its alignment.
    pub fn frame(&self) -> String {
        let view = self.root.view();
        place_horizontal(self.width, self.root.alignment(), &view)
    }

    fn drain(&mut self, first: Option<Cmd>) -> LoopControl {
        let mut queue: VecDeque<Cmd> = first.into_iter().collect();
        let mut steps = 0usize;
        while let Some(cmd) = queue.pop_front() {
            steps += 1;
            if steps > MAX_FOLLOW_UPS {
                warn!(target: "runtime", pending = queue.len(), "follow_up_cap_reached");
                break;
            }
            let Some(msg) = cmd.run() else {
                continue;
            };
            trace!(target: "runtime", kind = msg.kind(), "follow_up");
            match msg {
                Msg::Quit => self.quit = true,
                Msg::Batch(cmds) => queue.extend(cmds),
                other => queue.extend(self.root.update(&other)),
            }
        }
        if self.quit {
            LoopControl::Quit
        } else {
            LoopControl::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::KeyModifiers;
    use core_layout::options::{with_align_center, with_border_all, with_max_width};
    use core_style::{display_width, strip_ansi};
    use pretty_assertions::assert_eq;

    fn rows(frame: &str) -> Vec<String> {
        strip_ansi(frame).split('\n').map(str::to_string).collect()
    }

    #[test]
    fn frame_fills_requested_size() {
        let mut app = App::new("hi", Vec::new());
        app.resize(20, 6);
        let rows = rows(&app.frame());
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|r| display_width(r) == 20));
        assert_eq!(rows[0], format!("┌{}┐", "─".repeat(18)));
        assert_eq!(rows[1], format!("│ hi{}│", " ".repeat(15)));
    }

    #[test]
    fn capped_root_is_centered_in_frame() {
        let mut app = App::new("", vec![with_max_width(10), with_align_center()]);
        app.resize(30, 3);
        let rows = rows(&app.frame());
        assert_eq!(rows[0], format!("{}┌────────┐{}", " ".repeat(10), " ".repeat(10)));
    }

    #[test]
    fn tab_toggles_focus_through_both_levels() {
        let mut app = App::new("", vec![with_border_all()]);
        app.resize(30, 5);
        assert!(!app.root().is_focused());
        assert_eq!(app.handle_key(KeyEvent::plain(KeyCode::Tab)), LoopControl::Continue);
        assert!(app.root().is_focused());
        assert!(rows(&app.frame())[2].contains("● focused"));
        app.handle_key(KeyEvent::plain(KeyCode::Tab));
        assert!(!app.root().is_focused());
    }

    #[test]
    fn keys_reach_leaf_through_update() {
        let mut app = App::new("", Vec::new());
        app.resize(40, 3);
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert!(rows(&app.frame())[1].contains("last key: alt+x"));
    }

    #[test]
    fn quit_keys_stop_the_loop() {
        let mut app = App::new("", Vec::new());
        assert_eq!(app.handle_key(KeyEvent::plain(KeyCode::Esc)), LoopControl::Quit);
    }

    #[test]
    fn quit_message_from_command_stops_the_loop() {
        let mut app = App::new("", Vec::new());
        assert_eq!(app.drain(Some(Cmd::quit())), LoopControl::Quit);
    }

    #[test]
    fn self_feeding_commands_are_capped() {
        let mut app = App::new("", Vec::new());
        let cmds: Vec<Cmd> = (0..MAX_FOLLOW_UPS * 2).map(|_| Cmd::msg(Msg::Tick)).collect();
        assert_eq!(app.drain(Some(Cmd::msg(Msg::Batch(cmds)))), LoopControl::Continue);
    }
}
