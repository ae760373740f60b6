use crate::{
    message::ViewPortDirection,
    model::{column, viewport::ViewPort, TextBuffer},
};

use super::cursor;

/// Moves `topline` and `left_col` until the cursor is visible. Returns true
/// if the viewport had to move.
pub fn update_by_cursor(viewport: &mut ViewPort, text: &TextBuffer) -> bool {
    let previous = (viewport.topline, viewport.left_col);
    viewport.update_line_number_width(text.buffer.line_count());

    let y = text.cursor.y;
    if viewport.height == 0 || y < viewport.topline {
        viewport.topline = y;
    } else if y > viewport.last_visible_line() {
        viewport.topline = y + 1 - viewport.height;
    }

    let visual = text
        .buffer
        .line(y)
        .map_or(0, |line| column::to_visual_column(line, text.cursor.x, viewport.tab_size));

    let content_width = viewport.get_content_width();
    if content_width == 0 || visual < viewport.left_col {
        viewport.left_col = visual;
    } else if visual >= viewport.left_col + content_width {
        viewport.left_col = visual + 1 - content_width;
    }

    previous != (viewport.topline, viewport.left_col)
}

pub fn update_by_direction(
    viewport: &mut ViewPort,
    text: &mut TextBuffer,
    direction: &ViewPortDirection,
) {
    let line_count = text.buffer.line_count();
    let previous = viewport.topline;

    match direction {
        ViewPortDirection::HalfPageDown => half_page_down(viewport, line_count),
        ViewPortDirection::HalfPageUp => half_page_up(viewport),
        ViewPortDirection::PageDown => page_down(viewport, line_count),
        ViewPortDirection::PageUp => page_up(viewport),
        ViewPortDirection::ScrollDown(count) => scroll_down(viewport, line_count, *count),
        ViewPortDirection::ScrollUp(count) => scroll_up(viewport, *count),
    }

    if viewport.height == 0 {
        return;
    }

    if matches!(direction, ViewPortDirection::ScrollDown(_) | ViewPortDirection::ScrollUp(_)) {
        cursor::clamp_to_lines(
            &mut text.cursor,
            &text.buffer,
            viewport.topline,
            viewport.last_visible_line(),
        );
    } else {
        let delta = viewport.topline as isize - previous as isize;
        cursor::move_lines(&mut text.cursor, &text.buffer, delta);
        cursor::clamp_to_lines(
            &mut text.cursor,
            &text.buffer,
            viewport.topline,
            viewport.last_visible_line(),
        );
    }
}

/// Scrolls up by `count` lines, or by one line if `count` would pass the
/// first line.
pub fn scroll_up(viewport: &mut ViewPort, count: usize) {
    if viewport.topline >= count {
        viewport.topline -= count;
    } else if viewport.topline > 0 {
        viewport.topline -= 1;
    }
}

/// Scrolls down by `count` lines, or by one line if `count` would show lines
/// past the end of the buffer.
pub fn scroll_down(viewport: &mut ViewPort, line_count: usize, count: usize) {
    let max = line_count as isize - viewport.height as isize;
    let topline = viewport.topline as isize;

    if topline + count as isize <= max {
        viewport.topline += count;
    } else if topline < max {
        viewport.topline += 1;
    }
}

pub fn page_up(viewport: &mut ViewPort) {
    if viewport.topline > viewport.height {
        scroll_up(viewport, viewport.height);
    } else {
        viewport.topline = 0;
    }
}

pub fn page_down(viewport: &mut ViewPort, line_count: usize) {
    let remaining = line_count as isize - (viewport.topline + viewport.height) as isize;
    if remaining > viewport.height as isize {
        scroll_down(viewport, line_count, viewport.height);
    } else {
        viewport.topline = line_count.saturating_sub(viewport.height);
    }
}

pub fn half_page_up(viewport: &mut ViewPort) {
    let half = viewport.height / 2;
    if viewport.topline > half {
        scroll_up(viewport, half);
    } else {
        viewport.topline = 0;
    }
}

pub fn half_page_down(viewport: &mut ViewPort, line_count: usize) {
    let half = viewport.height / 2;
    let remaining = line_count as isize - (viewport.topline + viewport.height) as isize;
    if remaining > half as isize {
        scroll_down(viewport, line_count, half);
    } else {
        viewport.topline = line_count.saturating_sub(viewport.height);
    }
}
