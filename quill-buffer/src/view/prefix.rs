use crate::model::{style::ColorScheme, viewport::ViewPort};

use super::Cell;

pub fn get_line_number(vp: &ViewPort, index: usize, scheme: &ColorScheme) -> Vec<Cell> {
    let width = vp.line_number_width.saturating_sub(1);
    let number = format!("{:>width$} ", index + 1);

    number
        .chars()
        .map(|symbol| Cell::new(symbol, scheme.line_number))
        .collect()
}
