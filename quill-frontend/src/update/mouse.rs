use quill_buffer::message::{BufferMessage, ViewPortDirection};
use quill_keymap::message::{MouseButton, MouseEvent};

use crate::{
    action::RedrawLevel,
    model::{Model, MouseState},
};

const WHEEL_LINES: usize = 2;

pub fn update(model: &mut Model, event: &MouseEvent) -> RedrawLevel {
    match event.button {
        MouseButton::Primary => press(model, event),
        MouseButton::WheelDown => scroll(model, ViewPortDirection::ScrollDown(WHEEL_LINES)),
        MouseButton::WheelUp => scroll(model, ViewPortDirection::ScrollUp(WHEEL_LINES)),
        MouseButton::None => {
            model.mouse = MouseState::Idle;
            RedrawLevel::None
        }
    }
}

/// Moves the cursor onto the clicked cell. The first press anchors the
/// selection, presses while dragging extend it.
fn press(model: &mut Model, event: &MouseEvent) -> RedrawLevel {
    let viewport = &mut model.viewport;
    let text = &mut model.text;

    let column = usize::from(event.column)
        .saturating_sub(usize::from(viewport.x) + viewport.line_number_width)
        + viewport.left_col;

    let mut row = usize::from(event.row).saturating_sub(usize::from(viewport.y)) + viewport.topline;
    if viewport.height > 0 && row > viewport.last_visible_line() {
        quill_buffer::update(
            viewport,
            text,
            &BufferMessage::MoveViewPort(ViewPortDirection::ScrollDown(1)),
        );
        row = viewport.last_visible_line();
    }

    let row = row.min(text.buffer.line_count().saturating_sub(1));
    let x = text
        .cursor
        .char_pos_in_line(&text.buffer, row, column, viewport.tab_size);

    text.cursor.set_position(&text.buffer, x, row);

    match model.mouse {
        MouseState::Idle => text.cursor.set_anchor(),
        MouseState::Selecting => text.cursor.selection.end = text.cursor.loc,
    }
    model.mouse = MouseState::Selecting;

    tracing::trace!(
        "mouse press at ({}, {}) resolved to offset {}",
        event.column,
        event.row,
        text.cursor.loc
    );

    RedrawLevel::Full
}

fn scroll(model: &mut Model, direction: ViewPortDirection) -> RedrawLevel {
    quill_buffer::update(
        &mut model.viewport,
        &mut model.text,
        &BufferMessage::MoveViewPort(direction),
    );

    RedrawLevel::Full
}
