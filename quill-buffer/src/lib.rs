use message::BufferMessage;
use model::{
    style::{ColorScheme, HighlightMap},
    viewport::ViewPort,
    TextBuffer,
};
use view::Cell;

pub mod error;
pub mod message;
pub mod model;
pub mod update;
pub mod view;

pub fn update(viewport: &mut ViewPort, text: &mut TextBuffer, message: &BufferMessage) {
    update::update_buffer(viewport, text, message)
}

pub fn update_viewport_by_cursor(viewport: &mut ViewPort, text: &TextBuffer) -> bool {
    update::viewport::update_by_cursor(viewport, text)
}

pub fn view(
    viewport: &ViewPort,
    text: &TextBuffer,
    highlights: &HighlightMap,
    scheme: &ColorScheme,
) -> Vec<Vec<Cell>> {
    view::view(viewport, text, highlights, scheme)
}
