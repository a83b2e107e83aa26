//! Raw mode and alternate screen setup that is undone on every exit path.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Puts the terminal back the way it was found when dropped.
///
/// Each setup step is recorded as it succeeds, so a failure halfway through
/// setup only undoes the steps that actually ran.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
    alternate: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Wraps `out` without changing any terminal state yet.
    pub fn new(out: W) -> Self {
        Self {
            out,
            raw: false,
            alternate: false,
        }
    }

    /// Switches the terminal to raw mode.
    pub fn enable_raw_mode(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        self.raw = true;
        Ok(())
    }

    /// Switches `out` to the alternate screen.
    pub fn enter_alternate_screen(&mut self) -> io::Result<()> {
        execute!(self.out, EnterAlternateScreen)?;
        self.alternate = true;
        Ok(())
    }

    /// Undoes setup and reports the first error.
    pub fn restore(mut self) -> io::Result<()> {
        self.undo()
    }

    fn undo(&mut self) -> io::Result<()> {
        let mut result = Ok(());
        if std::mem::take(&mut self.alternate) {
            debug!("Leaving alternate screen");
            result = execute!(self.out, LeaveAlternateScreen, Show);
        }
        if std::mem::take(&mut self.raw) {
            debug!("Disabling raw mode");
            let disabled = disable_raw_mode();
            if result.is_ok() {
                result = disabled;
            }
        }
        result
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = self.undo() {
            warn!(error = %err, "Failed to restore terminal");
        }
    }
}
