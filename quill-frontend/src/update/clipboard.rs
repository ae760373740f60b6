use quill_buffer::message::{BufferMessage, TextModification};

use crate::{action::RedrawLevel, error::AppError, messenger::Messenger, model::Model};

use super::{key, Environment};

pub fn copy(model: &mut Model, environment: &mut Environment) -> RedrawLevel {
    let clipboard = &mut *environment.clipboard;
    if !clipboard.is_available() || !model.text.cursor.has_selection() {
        return RedrawLevel::None;
    }

    if let Err(error) = clipboard.write(&model.text.selection_text()) {
        report(environment.messenger, "copy to clipboard failed", error);
    }

    RedrawLevel::Full
}

/// Removes the selection only after it reached the clipboard.
pub fn cut(model: &mut Model, environment: &mut Environment) -> RedrawLevel {
    let clipboard = &mut *environment.clipboard;
    if !clipboard.is_available() || !model.text.cursor.has_selection() {
        return RedrawLevel::None;
    }

    match clipboard.write(&model.text.selection_text()) {
        Ok(()) => {
            quill_buffer::update(
                &mut model.viewport,
                &mut model.text,
                &BufferMessage::Modification(TextModification::DeleteSelection),
            );
        }
        Err(error) => report(environment.messenger, "cut to clipboard failed", error),
    }

    RedrawLevel::Full
}

/// Leaves the buffer untouched if the clipboard cannot be read.
pub fn paste(model: &mut Model, environment: &mut Environment) -> RedrawLevel {
    let clipboard = &mut *environment.clipboard;
    if !clipboard.is_available() {
        return RedrawLevel::None;
    }

    match clipboard.read() {
        Ok(content) if content.is_empty() => {}
        Ok(content) => {
            key::insert(model, &content);
        }
        Err(error) => report(environment.messenger, "paste from clipboard failed", error),
    }

    RedrawLevel::Full
}

fn report(messenger: &mut dyn Messenger, context: &str, error: AppError) {
    tracing::warn!("{}: {:?}", context, error);
    messenger.error(&error.to_string());
}
