use crate::model::{
    column,
    style::{ColorScheme, HighlightMap},
    viewport::ViewPort,
    TextBuffer,
};

use super::Cell;

/// Cells for one line in visual column space. `offset` is the absolute offset
/// of the first character of `content`.
pub fn get_cells(
    vp: &ViewPort,
    text: &TextBuffer,
    content: &str,
    offset: usize,
    highlights: &HighlightMap,
    scheme: &ColorScheme,
) -> Vec<Cell> {
    let selection = &text.cursor.selection;

    let mut cells = Vec::new();
    let mut char_offset = offset;
    for symbol in content.chars() {
        let style = if selection.contains(char_offset) {
            scheme.selection
        } else {
            highlights.get(&char_offset).copied().unwrap_or(scheme.default)
        };

        if symbol == '\t' {
            let width = column::cell_width(symbol, vp.tab_size);
            cells.extend((0..width).map(|_| Cell::new(' ', style)));
        } else {
            cells.push(Cell::new(symbol, style));
        }

        char_offset += 1;
    }

    if selection.contains(char_offset) {
        cells.push(Cell::new(' ', scheme.selection));
    }

    cells
}
