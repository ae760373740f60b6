use quill_buffer::model::{style::ColorScheme, viewport::ViewPort, TextBuffer};
use quill_keymap::KeyMap;

use crate::settings::Settings;

/// Whether the primary mouse button is currently held. A press in `Idle`
/// anchors a new selection, a press in `Selecting` extends it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MouseState {
    #[default]
    Idle,
    Selecting,
}

#[derive(Debug, Default)]
pub struct Model {
    pub color_scheme: ColorScheme,
    pub keymap: KeyMap,
    pub mouse: MouseState,
    pub text: TextBuffer,
    pub viewport: ViewPort,
}

impl Model {
    pub fn new(text: TextBuffer, settings: &Settings) -> Self {
        let mut viewport = ViewPort::default();
        viewport.set(&settings.window);
        viewport.update_line_number_width(text.buffer.line_count());

        Self {
            color_scheme: settings.color_scheme.clone(),
            keymap: KeyMap::default(),
            mouse: MouseState::default(),
            text,
            viewport,
        }
    }

    /// Swaps in another buffer together with its cursor and history.
    pub fn replace_text(&mut self, text: TextBuffer) {
        self.text = text;
        self.mouse = MouseState::Idle;
        self.viewport.topline = 0;
        self.viewport.left_col = 0;
        self.viewport
            .update_line_number_width(self.text.buffer.line_count());
    }
}
