use std::collections::HashMap;

use ratatui::style::{Color, Modifier, Style};

/// Styles by absolute character offset, supplied by a highlighter.
pub type HighlightMap = HashMap<usize, Style>;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorScheme {
    pub default: Style,
    pub line_number: Style,
    pub selection: Style,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            default: Style::default(),
            line_number: Style::default().fg(Color::DarkGray),
            selection: Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}
