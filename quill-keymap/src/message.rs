use crate::key::Key;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Key(Key),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub button: MouseButton,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MouseButton {
    /// Primary button pressed or dragged.
    Primary,
    /// No button held, sent on release and plain movement.
    None,
    WheelDown,
    WheelUp,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum KeyAction {
    Backspace,
    Char(char),
    Copy,
    Cut,
    Down,
    Enter,
    HalfPageDown,
    HalfPageUp,
    Left,
    Open,
    PageDown,
    PageUp,
    Paste,
    Quit,
    Redo,
    Right,
    Save,
    SelectAll,
    Space,
    Tab,
    Undo,
    Up,
}
