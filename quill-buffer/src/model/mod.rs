use std::{fs, path::PathBuf};

use crate::error::BufferError;

use self::{cursor::Cursor, undo::EventHandler};

pub mod column;
pub mod cursor;
pub mod style;
pub mod undo;
pub mod viewport;

/// Text content stored as lines without terminators. All positions handed in
/// and out are character offsets into the joined text, where every line break
/// counts as one character.
#[derive(Clone, Debug)]
pub struct Buffer {
    lines: Vec<String>,
    len: usize,
    dirty: bool,
    pub name: String,
    pub path: Option<PathBuf>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new("", None)
    }
}

impl Buffer {
    pub fn new(content: &str, path: Option<PathBuf>) -> Self {
        let name = path
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or_default();

        Self {
            lines: content.split('\n').map(str::to_owned).collect(),
            len: content.chars().count(),
            dirty: false,
            name,
            path,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).map_or(0, |line| line.chars().count())
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.name = path.to_string_lossy().to_string();
        self.path = Some(path);
    }

    /// Resolves an offset into `(x, y)`. Offsets past the end resolve to the
    /// end of the last line.
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let mut remaining = offset;
        for (y, line) in self.lines.iter().enumerate() {
            let len = line.chars().count();
            if remaining <= len {
                return (remaining, y);
            }
            remaining -= len + 1;
        }

        let last = self.lines.len().saturating_sub(1);
        (self.line_len(last), last)
    }

    /// Resolves `(x, y)` into an offset. Both coordinates are clamped into
    /// the buffer first.
    pub fn offset(&self, x: usize, y: usize) -> usize {
        let y = y.min(self.lines.len().saturating_sub(1));
        let preceding: usize = self
            .lines
            .iter()
            .take(y)
            .map(|line| line.chars().count() + 1)
            .sum();

        preceding + x.min(self.line_len(y))
    }

    pub fn slice(&self, start: usize, end: usize) -> String {
        let (start, end) = self.normalize(start, end);
        if start == end {
            return String::new();
        }

        let (start_x, start_y) = self.position(start);
        let (end_x, end_y) = self.position(end);
        if start_y == end_y {
            return self.lines[start_y]
                .chars()
                .skip(start_x)
                .take(end_x - start_x)
                .collect();
        }

        let mut result: String = self.lines[start_y].chars().skip(start_x).collect();
        for line in &self.lines[start_y + 1..end_y] {
            result.push('\n');
            result.push_str(line);
        }
        result.push('\n');
        result.extend(self.lines[end_y].chars().take(end_x));

        result
    }

    pub fn insert(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }

        let (x, y) = self.position(offset);
        tracing::trace!("insert {:?} at {} ({}, {})", text, offset, x, y);

        let mut parts = text.split('\n');
        let head = &mut self.lines[y];
        let split = byte_index(head, x);
        let tail = head.split_off(split);
        if let Some(first) = parts.next() {
            head.push_str(first);
        }

        let mut added: Vec<String> = parts.map(str::to_owned).collect();
        match added.last_mut() {
            Some(last) => last.push_str(&tail),
            None => self.lines[y].push_str(&tail),
        }
        self.lines.splice(y + 1..y + 1, added);

        self.len += text.chars().count();
        self.dirty = true;
    }

    /// Removes the range between both offsets and returns the removed text.
    pub fn remove(&mut self, start: usize, end: usize) -> String {
        let (start, end) = self.normalize(start, end);
        if start == end {
            return String::new();
        }

        let removed = self.slice(start, end);
        let (start_x, start_y) = self.position(start);
        let (end_x, end_y) = self.position(end);
        tracing::trace!("remove {}..{} ({:?})", start, end, removed);

        let end_line = &self.lines[end_y];
        let tail = end_line[byte_index(end_line, end_x)..].to_string();

        let start_line = &mut self.lines[start_y];
        let split = byte_index(start_line, start_x);
        start_line.truncate(split);
        start_line.push_str(&tail);
        self.lines.drain(start_y + 1..=end_y);

        self.len -= end - start;
        self.dirty = true;

        removed
    }

    pub fn save(&mut self) -> Result<(), BufferError> {
        let path = self.path.as_ref().ok_or(BufferError::NoPath)?;
        fs::write(path, self.text()).map_err(|source| BufferError::Save {
            path: path.clone(),
            source,
        })?;

        tracing::debug!("saved buffer to {:?}", path);
        self.dirty = false;

        Ok(())
    }

    fn normalize(&self, start: usize, end: usize) -> (usize, usize) {
        let (start, end) = if start > end {
            (end, start)
        } else {
            (start, end)
        };

        (start.min(self.len), end.min(self.len))
    }
}

fn byte_index(line: &str, char_index: usize) -> usize {
    line.char_indices()
        .nth(char_index)
        .map_or(line.len(), |(index, _)| index)
}

/// A buffer together with the cursor and edit history bound to it. The three
/// only change together.
#[derive(Debug, Default)]
pub struct TextBuffer {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub events: EventHandler,
}

impl TextBuffer {
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            events: EventHandler::default(),
        }
    }

    pub fn insert(&mut self, offset: usize, text: &str) {
        self.events
            .insert(&mut self.buffer, &mut self.cursor, offset, text);
    }

    pub fn remove(&mut self, start: usize, end: usize) {
        self.events
            .remove(&mut self.buffer, &mut self.cursor, start, end);
    }

    pub fn undo(&mut self) -> bool {
        self.events.undo(&mut self.buffer, &mut self.cursor)
    }

    pub fn redo(&mut self) -> bool {
        self.events.redo(&mut self.buffer, &mut self.cursor)
    }

    pub fn selection_text(&self) -> String {
        self.cursor.selection_text(&self.buffer)
    }

    /// Removes the selected range as one undoable edit. The cursor ends up on
    /// the lower bound of the selection.
    pub fn delete_selection(&mut self) {
        if !self.cursor.has_selection() {
            return;
        }

        let (start, end) = self.cursor.selection.range();
        self.remove(start, end);
        self.cursor.reset_selection();
    }
}
