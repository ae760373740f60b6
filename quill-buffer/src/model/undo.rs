use super::{
    cursor::{Cursor, CursorPosition},
    Buffer,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TextEventKind {
    Insert,
    Remove,
}

/// One undoable edit. `before` and `after` are the cursor positions to
/// restore when the edit gets undone or redone.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TextEvent {
    pub kind: TextEventKind,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub before: CursorPosition,
    pub after: CursorPosition,
}

#[derive(Debug, Default)]
pub struct EventHandler {
    undo: Vec<TextEvent>,
    redo: Vec<TextEvent>,
}

impl EventHandler {
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn insert(&mut self, buffer: &mut Buffer, cursor: &mut Cursor, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }

        let start = offset.min(buffer.len());
        let end = start + text.chars().count();
        let before = cursor.position();

        buffer.insert(start, text);
        cursor.set_loc(buffer, end);

        self.push(TextEvent {
            kind: TextEventKind::Insert,
            start,
            end,
            text: text.to_string(),
            before,
            after: cursor.position(),
        });
    }

    pub fn remove(&mut self, buffer: &mut Buffer, cursor: &mut Cursor, start: usize, end: usize) {
        let (start, end) = (
            start.min(end).min(buffer.len()),
            start.max(end).min(buffer.len()),
        );
        if start == end {
            return;
        }

        let before = cursor.position();
        let text = buffer.remove(start, end);
        cursor.set_loc(buffer, start);

        self.push(TextEvent {
            kind: TextEventKind::Remove,
            start,
            end,
            text,
            before,
            after: cursor.position(),
        });
    }

    pub fn undo(&mut self, buffer: &mut Buffer, cursor: &mut Cursor) -> bool {
        let event = match self.undo.pop() {
            Some(it) => it,
            None => return false,
        };

        tracing::debug!("undo {:?}", event);

        match event.kind {
            TextEventKind::Insert => {
                buffer.remove(event.start, event.end);
            }
            TextEventKind::Remove => buffer.insert(event.start, &event.text),
        }
        cursor.restore(buffer, &event.before);

        self.redo.push(event);

        true
    }

    pub fn redo(&mut self, buffer: &mut Buffer, cursor: &mut Cursor) -> bool {
        let event = match self.redo.pop() {
            Some(it) => it,
            None => return false,
        };

        tracing::debug!("redo {:?}", event);

        match event.kind {
            TextEventKind::Insert => buffer.insert(event.start, &event.text),
            TextEventKind::Remove => {
                buffer.remove(event.start, event.end);
            }
        }
        cursor.restore(buffer, &event.after);

        self.undo.push(event);

        true
    }

    fn push(&mut self, event: TextEvent) {
        tracing::trace!("recording {:?}", event);

        self.undo.push(event);
        self.redo.clear();
    }
}
