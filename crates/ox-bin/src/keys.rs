//! Translation from crossterm key events to the normalized `core_events` keys.

use core_events::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::event::{
    KeyCode as CKeyCode, KeyEvent as CKeyEvent, KeyEventKind as CKind, KeyModifiers as CMods,
};

fn map_mods(m: CMods) -> KeyModifiers {
    let mut out = KeyModifiers::empty();
    if m.contains(CMods::CONTROL) {
        out |= KeyModifiers::CTRL;
    }
    if m.contains(CMods::ALT) {
        out |= KeyModifiers::ALT;
    }
    if m.contains(CMods::SHIFT) {
        out |= KeyModifiers::SHIFT;
    }
    out
}

/// `None` for releases and keys the views have no use for.
pub fn map_key_event(key: &CKeyEvent) -> Option<KeyEvent> {
    if key.kind == CKind::Release {
        return None;
    }
    let code = match key.code {
        CKeyCode::Char(c) => KeyCode::Char(c),
        CKeyCode::Enter => KeyCode::Enter,
        CKeyCode::Esc => KeyCode::Esc,
        CKeyCode::Backspace => KeyCode::Backspace,
        CKeyCode::Tab => KeyCode::Tab,
        CKeyCode::BackTab => KeyCode::BackTab,
        CKeyCode::Up => KeyCode::Up,
        CKeyCode::Down => KeyCode::Down,
        CKeyCode::Left => KeyCode::Left,
        CKeyCode::Right => KeyCode::Right,
        _ => return None,
    };
    Some(KeyEvent::new(code, map_mods(key.modifiers)))
}

/// Short human label such as `ctrl+x` or `enter`.
pub fn describe(key: &KeyEvent) -> String {
    let mut out = String::new();
    if key.mods.contains(KeyModifiers::CTRL) {
        out.push_str("ctrl+");
    }
    if key.mods.contains(KeyModifiers::ALT) {
        out.push_str("alt+");
    }
    match key.code {
        KeyCode::Char(' ') => out.push_str("space"),
        KeyCode::Char(c) => out.push(c),
        KeyCode::Enter => out.push_str("enter"),
        KeyCode::Esc => out.push_str("esc"),
        KeyCode::Backspace => out.push_str("backspace"),
        KeyCode::Tab => out.push_str("tab"),
        KeyCode::BackTab => out.push_str("shift+tab"),
        KeyCode::Up => out.push_str("up"),
        KeyCode::Down => out.push_str("down"),
        KeyCode::Left => out.push_str("left"),
        KeyCode::Right => out.push_str("right"),
    }
    out
}

pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('q') => key.mods.is_empty(),
        KeyCode::Char('c') => key.mods.contains(KeyModifiers::CTRL),
        _ => false,
    }
}
