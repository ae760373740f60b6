//! Conversions between the two column spaces of a line. A character column
//! counts characters, a visual column counts screen cells after every tab was
//! expanded into `tab_size` cells.

pub fn cell_width(character: char, tab_size: usize) -> usize {
    if character == '\t' {
        tab_size
    } else {
        1
    }
}

pub fn to_visual_column(line: &str, char_column: usize, tab_size: usize) -> usize {
    line.chars()
        .take(char_column)
        .map(|character| cell_width(character, tab_size))
        .sum()
}

/// Returns the character column whose visual column is the nearest one not
/// greater than `visual_column`. Targets past the line end resolve to the
/// line length.
pub fn to_char_column(line: &str, visual_column: usize, tab_size: usize) -> usize {
    let mut visual = 0;
    for (index, character) in line.chars().enumerate() {
        visual += cell_width(character, tab_size);
        if visual > visual_column {
            return index;
        }
    }

    line.chars().count()
}

pub fn visual_width(line: &str, tab_size: usize) -> usize {
    to_visual_column(line, usize::MAX, tab_size)
}
