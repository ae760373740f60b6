use super::{column, Buffer};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CursorPosition {
    pub loc: usize,
    pub x: usize,
    pub y: usize,
}

/// Selection bounds as offsets. `start` is the anchor and `end` follows the
/// cursor, so the pair may run in either direction.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
    pub anchor_x: usize,
    pub anchor_y: usize,
}

impl Selection {
    pub fn is_active(&self) -> bool {
        self.start != self.end
    }

    pub fn range(&self) -> (usize, usize) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    /// Inclusive on both bounds, matching how selections are painted.
    pub fn contains(&self, offset: usize) -> bool {
        let (start, end) = self.range();
        self.is_active() && start <= offset && offset <= end
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Cursor {
    pub loc: usize,
    pub x: usize,
    pub y: usize,
    /// Column remembered across a run of vertical moves.
    pub expanded: Option<usize>,
    pub selection: Selection,
}

impl Cursor {
    pub fn position(&self) -> CursorPosition {
        CursorPosition {
            loc: self.loc,
            x: self.x,
            y: self.y,
        }
    }

    pub fn set_loc(&mut self, buffer: &Buffer, loc: usize) {
        self.loc = loc.min(buffer.len());
        (self.x, self.y) = buffer.position(self.loc);
        self.expanded = None;
    }

    pub fn set_position(&mut self, buffer: &Buffer, x: usize, y: usize) {
        self.set_loc(buffer, buffer.offset(x, y));
    }

    pub fn restore(&mut self, buffer: &Buffer, position: &CursorPosition) {
        self.set_loc(buffer, position.loc);
        self.reset_selection();
    }

    /// Signed character offset from the cursor to `(x, y)`.
    pub fn distance(&self, buffer: &Buffer, x: usize, y: usize) -> isize {
        buffer.offset(x, y) as isize - self.loc as isize
    }

    /// Maps a visual column on `row` to the character column a click there
    /// refers to.
    pub fn char_pos_in_line(
        &self,
        buffer: &Buffer,
        row: usize,
        visual_column: usize,
        tab_size: usize,
    ) -> usize {
        buffer.line(row).map_or(0, |line| {
            column::to_char_column(line, visual_column, tab_size)
        })
    }

    pub fn visual_column(&self, buffer: &Buffer, tab_size: usize) -> usize {
        buffer.line(self.y).map_or(0, |line| {
            column::to_visual_column(line, self.x, tab_size)
        })
    }

    pub fn has_selection(&self) -> bool {
        self.selection.is_active()
    }

    pub fn selection_text(&self, buffer: &Buffer) -> String {
        let (start, end) = self.selection.range();
        buffer.slice(start, end)
    }

    pub fn set_anchor(&mut self) {
        self.selection = Selection {
            start: self.loc,
            end: self.loc,
            anchor_x: self.x,
            anchor_y: self.y,
        };
    }

    pub fn reset_selection(&mut self) {
        self.set_anchor();
    }
}
