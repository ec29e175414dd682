//! Theme collaborator: the small set of colors a container needs.
//!
//! Containers ask three pure questions at render time: the background color,
//! the primary (accent) color used for a focused border, and the neutral border
//! color. Anything richer belongs to the views themselves.
//!
//! A process-wide current theme exists so deeply nested containers do not
//! need a theme threaded through every constructor. Containers may still carry
//! their own override, which always wins over the current theme.
//!
//! Invariants:
//! * `current()` always returns a theme; before any `set_current` call it is
//!   `Palette::opencode()`.
//! * Theme queries are pure: the same theme answers the same colors every call.

mod color;
mod palette;

pub use color::{ColorError, parse_color};
pub use core_style::Color;
pub use palette::Palette;

use std::sync::{Arc, RwLock};

pub trait Theme: Send + Sync {
    fn name(&self) -> &str;
    fn background(&self) -> Color;
    fn primary(&self) -> Color;
    fn border(&self) -> Color;
}

pub type ThemeRef = Arc<dyn Theme>;

static CURRENT: RwLock<Option<ThemeRef>> = RwLock::new(None);

/// The process-wide theme used by containers without an override.
pub fn current() -> ThemeRef {
    let guard = CURRENT.read().unwrap_or_else(|e| e.into_inner());
    match guard.as_ref() {
        Some(theme) => Arc::clone(theme),
        None => Arc::new(Palette::opencode()),
    }
}

/// Replace the process-wide theme.
pub fn set_current(theme: ThemeRef) {
    tracing::debug!(target: "theme", name = theme.name(), "theme_switched");
    let mut guard = CURRENT.write().unwrap_or_else(|e| e.into_inner());
    *guard = Some(theme);
}
