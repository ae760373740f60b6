use std::path::PathBuf;

use crate::{
    action::{DispatchResult, RedrawLevel},
    error::AppError,
    messenger::Messenger,
    model::Model,
    open,
};

const QUIT_UNSAVED: &str = "You have unsaved changes. Quit anyway? ";
const OPEN_UNSAVED: &str = "You have unsaved changes. Continue? ";

pub fn quit(model: &Model, messenger: &mut dyn Messenger) -> DispatchResult {
    if model.text.buffer.is_dirty() && !confirm(messenger, QUIT_UNSAVED) {
        tracing::debug!("quit aborted");
        return DispatchResult::Redraw(RedrawLevel::Full);
    }

    DispatchResult::Quit
}

pub fn save(model: &mut Model, messenger: &mut dyn Messenger) -> RedrawLevel {
    if model.text.buffer.path.is_none() {
        match ask_path(messenger, "Filename: ") {
            Some(path) => model.text.buffer.set_path(path),
            None => return RedrawLevel::Full,
        }
    }

    if let Err(error) = model.text.buffer.save() {
        messenger.error(&AppError::from(error).to_string());
    }

    RedrawLevel::CursorOnly
}

/// Replaces the buffer with a file read from disk. The current buffer stays
/// untouched if the user cancels or the file cannot be read.
pub fn open(model: &mut Model, messenger: &mut dyn Messenger) -> RedrawLevel {
    if model.text.buffer.is_dirty() && !confirm(messenger, OPEN_UNSAVED) {
        return RedrawLevel::Full;
    }

    let path = match ask_path(messenger, "File to open: ") {
        Some(it) => it,
        None => return RedrawLevel::Full,
    };

    match open::read_file(&path) {
        Ok(text) => model.replace_text(text),
        Err(error) => messenger.error(&format!("Opening {:?} failed: {}", path, error)),
    }

    RedrawLevel::Full
}

fn confirm(messenger: &mut dyn Messenger, question: &str) -> bool {
    messenger.prompt(question).is_some_and(|answer| {
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    })
}

fn ask_path(messenger: &mut dyn Messenger, question: &str) -> Option<PathBuf> {
    let answer = messenger.prompt(question)?;
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    }
}
