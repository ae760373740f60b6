use std::io::{stderr, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    queue,
    style::Print,
    terminal::{self, Clear, ClearType},
};

use crate::error::AppError;

/// Blocking questions and fire and forget error reports towards the user.
pub trait Messenger {
    /// Returns `None` if the user cancelled the prompt.
    fn prompt(&mut self, question: &str) -> Option<String>;
    fn error(&mut self, message: &str);
}

/// Uses the bottom terminal row. Prompts paint directly to the terminal, so
/// the frame has to be repainted completely once a prompt is done.
#[derive(Debug, Default)]
pub struct TerminalMessenger {
    invalidated: bool,
    message: Option<String>,
}

impl TerminalMessenger {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn take_invalidated(&mut self) -> bool {
        std::mem::take(&mut self.invalidated)
    }
}

impl Messenger for TerminalMessenger {
    fn prompt(&mut self, question: &str) -> Option<String> {
        self.invalidated = true;

        match read_answer(question) {
            Ok(answer) => {
                tracing::debug!("prompt {:?} answered with {:?}", question, answer);
                answer
            }
            Err(error) => {
                tracing::error!("prompt {:?} failed: {:?}", question, error);
                None
            }
        }
    }

    fn error(&mut self, message: &str) {
        tracing::error!("{}", message);
        self.message = Some(message.to_string());
    }
}

fn read_answer(question: &str) -> Result<Option<String>, AppError> {
    let mut answer = String::new();
    loop {
        draw_prompt(question, &answer)?;

        let key = match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => key,
            _ => continue,
        };

        match key.code {
            KeyCode::Enter => return Ok(Some(answer)),
            KeyCode::Esc => return Ok(None),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(None)
            }
            KeyCode::Backspace => {
                answer.pop();
            }
            KeyCode::Char(c) => answer.push(c),
            _ => {}
        }
    }
}

fn draw_prompt(question: &str, answer: &str) -> Result<(), AppError> {
    let (_, rows) = terminal::size()?;

    let mut out = stderr();
    queue!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        Clear(ClearType::CurrentLine),
        Print(question),
        Print(answer)
    )?;
    out.flush()?;

    Ok(())
}
