use crate::{
    message::CursorDirection,
    model::{cursor::Cursor, Buffer},
};

pub fn update_by_direction(cursor: &mut Cursor, buffer: &Buffer, direction: &CursorDirection) {
    match direction {
        CursorDirection::Down => down(cursor, buffer),
        CursorDirection::Left => left(cursor, buffer),
        CursorDirection::Right => right(cursor, buffer),
        CursorDirection::Up => up(cursor, buffer),
    }
}

pub fn up(cursor: &mut Cursor, buffer: &Buffer) {
    if cursor.y == 0 {
        return;
    }

    move_to_line(cursor, buffer, cursor.y - 1);
}

pub fn down(cursor: &mut Cursor, buffer: &Buffer) {
    if cursor.y + 1 >= buffer.line_count() {
        return;
    }

    move_to_line(cursor, buffer, cursor.y + 1);
}

pub fn left(cursor: &mut Cursor, buffer: &Buffer) {
    if cursor.loc == 0 {
        return;
    }

    if cursor.x == 0 {
        cursor.y -= 1;
        cursor.x = buffer.line_len(cursor.y);
    } else {
        cursor.x -= 1;
    }

    cursor.loc -= 1;
    cursor.expanded = None;
}

pub fn right(cursor: &mut Cursor, buffer: &Buffer) {
    if cursor.loc >= buffer.len() {
        return;
    }

    if cursor.x >= buffer.line_len(cursor.y) {
        cursor.y += 1;
        cursor.x = 0;
    } else {
        cursor.x += 1;
    }

    cursor.loc += 1;
    cursor.expanded = None;
}

/// Moves the cursor by `delta` lines, clamped to the buffer, keeping the
/// remembered column.
pub fn move_lines(cursor: &mut Cursor, buffer: &Buffer, delta: isize) {
    let last = buffer.line_count().saturating_sub(1);
    let target = cursor.y.saturating_add_signed(delta).min(last);
    if target != cursor.y {
        move_to_line(cursor, buffer, target);
    }
}

/// Pulls the cursor into the rows `[first, last]`.
pub fn clamp_to_lines(cursor: &mut Cursor, buffer: &Buffer, first: usize, last: usize) {
    if cursor.y < first {
        move_lines(cursor, buffer, (first - cursor.y) as isize);
    } else if cursor.y > last {
        move_lines(cursor, buffer, -((cursor.y - last) as isize));
    }
}

fn move_to_line(cursor: &mut Cursor, buffer: &Buffer, y: usize) {
    let expanded = cursor.expanded.unwrap_or(cursor.x);

    cursor.y = y;
    cursor.x = expanded.min(buffer.line_len(y));
    cursor.loc = buffer.offset(cursor.x, cursor.y);
    cursor.expanded = Some(expanded);
}
