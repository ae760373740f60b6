use std::io::{stderr, BufWriter, Stderr};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use crate::error::AppError;

pub struct TerminalWrapper {
    inner: Option<Terminal<CrosstermBackend<BufWriter<Stderr>>>>,
}

impl TerminalWrapper {
    pub fn start() -> Result<Self, AppError> {
        stderr().execute(EnterAlternateScreen)?;
        stderr().execute(EnableMouseCapture)?;
        terminal::enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))?;
        terminal.clear()?;

        Ok(Self {
            inner: Some(terminal),
        })
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if self.inner.take().is_none() {
            return Ok(());
        }

        terminal::disable_raw_mode()?;
        stderr().execute(DisableMouseCapture)?;
        stderr().execute(LeaveAlternateScreen)?;

        Ok(())
    }

    /// Forgets what was painted, so the next draw repaints every cell.
    pub fn clear(&mut self) -> Result<(), AppError> {
        if let Some(term) = &mut self.inner {
            term.clear()?;
        }

        Ok(())
    }

    pub fn draw(&mut self, layout: impl FnOnce(&mut Frame<'_>)) -> Result<(), AppError> {
        if let Some(term) = &mut self.inner {
            term.draw(layout)?;
        }

        Ok(())
    }
}

impl Drop for TerminalWrapper {
    fn drop(&mut self) {
        if let Err(error) = self.shutdown() {
            tracing::error!("restoring terminal failed: {:?}", error);
        }
    }
}
