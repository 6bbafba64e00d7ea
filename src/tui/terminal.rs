use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode alternate screen, released on restore or drop
pub struct TerminalManager {
    terminal: CrosstermTerminal,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self { terminal, restored: false })
    }

    pub fn terminal_mut(&mut self) -> &mut CrosstermTerminal {
        &mut self.terminal
    }

    /// Leave the alternate screen, reporting failures
    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        leave(&mut self.terminal)
    }
}

fn leave(terminal: &mut CrosstermTerminal) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    Ok(())
}

// Panics and early returns still hand the terminal back
impl Drop for TerminalManager {
    fn drop(&mut self) {
        if !self.restored {
            let _ = leave(&mut self.terminal);
        }
    }
}
