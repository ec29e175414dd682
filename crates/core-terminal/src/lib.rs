//! Terminal backend abstraction and crossterm implementation.
//!
//! Frames are whole rendered strings (rows separated by `\n`, styling already
//! embedded as escape sequences). Each draw repaints every row from column 0
//! and clears what remains below the frame, so a shrinking frame leaves no
//! residue.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
        disable_raw_mode, enable_raw_mode,
    },
};
use std::io::{Write, stdout};
use tracing::{debug, trace};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Current `(columns, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
    fn draw(&mut self, frame: &str) -> Result<()>;
}

/// Queue the commands that paint `frame` at the origin, then flush.
pub fn write_frame<W: Write>(out: &mut W, frame: &str) -> Result<()> {
    let mut rows = 0u16;
    for (y, line) in frame.split('\n').enumerate() {
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y), Clear(ClearType::UntilNewLine), Print(line))?;
        rows = y.saturating_add(1);
    }
    queue!(out, MoveTo(0, rows), Clear(ClearType::FromCursorDown))?;
    out.flush()?;
    trace!(target: "terminal", rows, bytes = frame.len(), "frame_written");
    Ok(())
}

pub struct CrosstermBackend {
    entered: bool,
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a> {
    backend: &'a mut CrosstermBackend,
    active: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    /// Enter and return a guard that will leave on drop.
    pub fn enter_guard(&mut self) -> Result<TerminalGuard<'_>> {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode()?;
            execute!(stdout(), EnterAlternateScreen, Hide)?;
            self.entered = true;
            debug!(target: "terminal", "entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(stdout(), LeaveAlternateScreen, Show)?;
            disable_raw_mode()?;
            self.entered = false;
            debug!(target: "terminal", "left");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn draw(&mut self, frame: &str) -> Result<()> {
        write_frame(&mut stdout().lock(), frame)
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

impl<'a> TerminalGuard<'a> {
    pub fn backend(&mut self) -> &mut CrosstermBackend {
        self.backend
    }
}

impl<'a> Drop for TerminalGuard<'a> {
    fn drop(&mut self) {
        if self.active {
            let _ = self.backend.leave();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::Command;
    use pretty_assertions::assert_eq;

    fn ansi(cmd: impl Command) -> String {
        let mut s = String::new();
        cmd.write_ansi(&mut s).unwrap();
        s
    }

    #[test]
    fn frame_rows_are_positioned_and_cleared() {
        let mut out = Vec::new();
        write_frame(&mut out, "ab\ncd").unwrap();
        let expected = [
            ansi(MoveTo(0, 0)),
            ansi(Clear(ClearType::UntilNewLine)),
            "ab".to_string(),
            ansi(MoveTo(0, 1)),
            ansi(Clear(ClearType::UntilNewLine)),
            "cd".to_string(),
            ansi(MoveTo(0, 2)),
            ansi(Clear(ClearType::FromCursorDown)),
        ]
        .concat();
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn empty_frame_still_clears_screen() {
        let mut out = Vec::new();
        write_frame(&mut out, "").unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.ends_with(&ansi(Clear(ClearType::FromCursorDown))));
        assert!(s.contains(&ansi(MoveTo(0, 1))));
    }

    #[test]
    fn new_backend_is_not_entered() {
        let mut backend = CrosstermBackend::new();
        assert!(!backend.is_entered());
        // Leaving a never-entered terminal is a no-op.
        backend.leave().unwrap();
    }
}
