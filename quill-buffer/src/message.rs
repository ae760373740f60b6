#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferMessage {
    Modification(TextModification),
    MoveCursor(CursorDirection),
    MoveViewPort(ViewPortDirection),
    Redo,
    ResetSelection,
    SelectAll,
    Undo,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    DeleteSelection,
    Insert(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Down,
    Left,
    Right,
    Up,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewPortDirection {
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    ScrollDown(usize),
    ScrollUp(usize),
}
