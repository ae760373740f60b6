use crate::{message::TextModification, model::TextBuffer};

use super::cursor;

pub fn update(text: &mut TextBuffer, modification: &TextModification) {
    match modification {
        TextModification::DeleteCharBeforeCursor => {
            if text.cursor.loc == 0 {
                return;
            }

            let end = text.cursor.loc;
            let mut start = text.cursor.clone();
            cursor::left(&mut start, &text.buffer);

            text.remove(start.loc, end);
        }
        TextModification::DeleteSelection => text.delete_selection(),
        TextModification::Insert(raw) => {
            let offset = text.cursor.loc;
            text.insert(offset, raw);
            text.cursor.reset_selection();
        }
    }
}
