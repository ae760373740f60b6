use crate::{
    message::BufferMessage,
    model::{cursor::Selection, viewport::ViewPort, TextBuffer},
};

pub mod cursor;
mod modification;
pub mod viewport;

pub fn update_buffer(viewport: &mut ViewPort, text: &mut TextBuffer, message: &BufferMessage) {
    tracing::debug!("handling buffer message: {:?}", message);

    match message {
        BufferMessage::Modification(modification) => modification::update(text, modification),
        BufferMessage::MoveCursor(direction) => {
            cursor::update_by_direction(&mut text.cursor, &text.buffer, direction)
        }
        BufferMessage::MoveViewPort(direction) => {
            viewport::update_by_direction(viewport, text, direction)
        }
        BufferMessage::Redo => {
            text.redo();
        }
        BufferMessage::ResetSelection => text.cursor.reset_selection(),
        BufferMessage::SelectAll => {
            let len = text.buffer.len();
            let (anchor_x, anchor_y) = text.buffer.position(len);

            text.cursor.set_loc(&text.buffer, 0);
            text.cursor.selection = Selection {
                start: len,
                end: 0,
                anchor_x,
                anchor_y,
            };
        }
        BufferMessage::Undo => {
            text.undo();
        }
    }
}
