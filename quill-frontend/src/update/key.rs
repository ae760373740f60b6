use quill_buffer::message::{BufferMessage, CursorDirection, TextModification, ViewPortDirection};
use quill_keymap::message::KeyAction;

use crate::{
    action::{DispatchResult, RedrawLevel},
    model::Model,
};

use super::{clipboard, file, Environment};

pub fn update(model: &mut Model, environment: &mut Environment, action: &KeyAction) -> DispatchResult {
    let level = match action {
        KeyAction::Down => move_cursor(model, CursorDirection::Down),
        KeyAction::Left => move_cursor(model, CursorDirection::Left),
        KeyAction::Right => move_cursor(model, CursorDirection::Right),
        KeyAction::Up => move_cursor(model, CursorDirection::Up),

        KeyAction::Char(c) => insert(model, &c.to_string()),
        KeyAction::Enter => insert(model, "\n"),
        KeyAction::Space => insert(model, " "),
        KeyAction::Tab => insert(model, "\t"),
        KeyAction::Backspace => backspace(model),

        KeyAction::Redo => buffer(model, BufferMessage::Redo),
        KeyAction::Undo => buffer(model, BufferMessage::Undo),
        KeyAction::SelectAll => buffer(model, BufferMessage::SelectAll),

        KeyAction::HalfPageDown => scroll(model, ViewPortDirection::HalfPageDown),
        KeyAction::HalfPageUp => scroll(model, ViewPortDirection::HalfPageUp),
        KeyAction::PageDown => scroll(model, ViewPortDirection::PageDown),
        KeyAction::PageUp => scroll(model, ViewPortDirection::PageUp),

        KeyAction::Copy => clipboard::copy(model, environment),
        KeyAction::Cut => clipboard::cut(model, environment),
        KeyAction::Paste => clipboard::paste(model, environment),

        KeyAction::Open => file::open(model, environment.messenger),
        KeyAction::Quit => return file::quit(model, environment.messenger),
        KeyAction::Save => file::save(model, environment.messenger),
    };

    DispatchResult::Redraw(level)
}

fn move_cursor(model: &mut Model, direction: CursorDirection) -> RedrawLevel {
    let level = if model.text.cursor.has_selection() {
        buffer(model, BufferMessage::ResetSelection)
    } else {
        RedrawLevel::CursorOnly
    };

    quill_buffer::update(
        &mut model.viewport,
        &mut model.text,
        &BufferMessage::MoveCursor(direction),
    );

    level
}

/// Replaces an active selection with `raw`.
pub fn insert(model: &mut Model, raw: &str) -> RedrawLevel {
    delete_selection(model);
    buffer(
        model,
        BufferMessage::Modification(TextModification::Insert(raw.to_string())),
    )
}

fn backspace(model: &mut Model) -> RedrawLevel {
    if delete_selection(model) {
        return RedrawLevel::Full;
    }

    if model.text.cursor.loc == 0 {
        return RedrawLevel::None;
    }

    buffer(
        model,
        BufferMessage::Modification(TextModification::DeleteCharBeforeCursor),
    )
}

pub fn delete_selection(model: &mut Model) -> bool {
    if !model.text.cursor.has_selection() {
        return false;
    }

    buffer(
        model,
        BufferMessage::Modification(TextModification::DeleteSelection),
    );

    true
}

fn scroll(model: &mut Model, direction: ViewPortDirection) -> RedrawLevel {
    buffer(model, BufferMessage::MoveViewPort(direction))
}

fn buffer(model: &mut Model, message: BufferMessage) -> RedrawLevel {
    quill_buffer::update(&mut model.viewport, &mut model.text, &message);
    RedrawLevel::Full
}
