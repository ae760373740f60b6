use ratatui::style::Style;

use crate::model::{
    style::{ColorScheme, HighlightMap},
    viewport::ViewPort,
    TextBuffer,
};

mod line;
mod prefix;

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub symbol: char,
    pub style: Style,
}

impl Cell {
    pub fn new(symbol: char, style: Style) -> Self {
        Self { symbol, style }
    }
}

/// Projects the visible window of the buffer into rows of styled cells. Rows
/// start with the line number gutter and are cut at the viewport width.
pub fn view(
    viewport: &ViewPort,
    text: &TextBuffer,
    highlights: &HighlightMap,
    scheme: &ColorScheme,
) -> Vec<Vec<Cell>> {
    let buffer = &text.buffer;
    let mut offset = buffer.offset(0, viewport.topline);

    let mut rows = Vec::new();
    for (index, content) in buffer
        .lines()
        .iter()
        .enumerate()
        .skip(viewport.topline)
        .take(viewport.height)
    {
        let mut row = prefix::get_line_number(viewport, index, scheme);
        row.extend(
            line::get_cells(viewport, text, content, offset, highlights, scheme)
                .into_iter()
                .skip(viewport.left_col)
                .take(viewport.get_content_width()),
        );
        row.truncate(viewport.width);

        rows.push(row);
        offset += content.chars().count() + 1;
    }

    rows
}
