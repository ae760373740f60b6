use std::{collections::VecDeque, path::PathBuf};

use quill_buffer::model::{Buffer, TextBuffer};
use quill_frontend::{
    action::{DispatchResult, RedrawLevel},
    clipboard::Clipboard,
    error::AppError,
    messenger::Messenger,
    model::{Model, MouseState},
    settings::Settings,
    update::{update, Environment},
};
use quill_keymap::{
    key::Key,
    message::{InputEvent, MouseButton, MouseEvent},
};

#[derive(Default)]
struct FakeClipboard {
    available: bool,
    content: String,
    fail_read: bool,
    fail_write: bool,
}

impl Clipboard for FakeClipboard {
    fn is_available(&self) -> bool {
        self.available
    }

    fn write(&mut self, text: &str) -> Result<(), AppError> {
        if self.fail_write {
            return Err(AppError::ClipboardUnavailable);
        }

        self.content = text.to_string();
        Ok(())
    }

    fn read(&mut self) -> Result<String, AppError> {
        if self.fail_read {
            Err(AppError::ClipboardUnavailable)
        } else {
            Ok(self.content.clone())
        }
    }
}

#[derive(Default)]
struct FakeMessenger {
    answers: VecDeque<Option<String>>,
    errors: Vec<String>,
    questions: Vec<String>,
}

impl Messenger for FakeMessenger {
    fn prompt(&mut self, question: &str) -> Option<String> {
        self.questions.push(question.to_string());
        self.answers.pop_front().flatten()
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

struct Harness {
    clipboard: FakeClipboard,
    messenger: FakeMessenger,
    model: Model,
}

impl Harness {
    fn new(content: &str, width: u16, height: u16) -> Self {
        let text = TextBuffer::new(Buffer::new(content, None));
        let mut harness = Self {
            clipboard: FakeClipboard {
                available: true,
                ..Default::default()
            },
            messenger: FakeMessenger::default(),
            model: Model::new(text, &Settings::default()),
        };

        harness.send(InputEvent::Resize(width, height));
        harness
    }

    fn send(&mut self, event: InputEvent) -> DispatchResult {
        let result = update(
            &mut self.model,
            &mut Environment {
                clipboard: &mut self.clipboard,
                messenger: &mut self.messenger,
            },
            &event,
        );

        let viewport = &self.model.viewport;
        let cursor = &self.model.text.cursor;
        if viewport.height > 0 {
            assert!(viewport.topline <= cursor.y, "cursor above viewport");
            assert!(
                cursor.y <= viewport.topline + viewport.height - 1,
                "cursor below viewport"
            );
        }

        result
    }

    fn keys(&mut self, keycode: &str) -> DispatchResult {
        let key = Key::from_keycode_string(keycode).expect("valid keycode");
        self.send(InputEvent::Key(key))
    }

    fn typed(&mut self, text: &str) {
        for c in text.chars() {
            self.keys(&c.to_string());
        }
    }

    fn mouse(&mut self, column: u16, row: u16, button: MouseButton) -> DispatchResult {
        self.send(InputEvent::Mouse(MouseEvent {
            column,
            row,
            button,
        }))
    }

    fn text(&self) -> String {
        self.model.text.buffer.text()
    }
}

fn redraw(level: RedrawLevel) -> DispatchResult {
    DispatchResult::Redraw(level)
}

fn numbered_lines(count: usize) -> String {
    (0..count)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn arrows_only_move_cursor() {
    let mut harness = Harness::new("abc\ndef", 80, 24);

    assert_eq!(harness.keys("<right>"), redraw(RedrawLevel::CursorOnly));
    harness.keys("<right>");
    harness.keys("<right>");

    let cursor = &harness.model.text.cursor;
    assert_eq!((cursor.loc, cursor.x, cursor.y), (3, 3, 0));

    harness.keys("<right>");
    let cursor = &harness.model.text.cursor;
    assert_eq!((cursor.loc, cursor.x, cursor.y), (4, 0, 1));
}

#[test]
fn typed_characters_undo_one_by_one() {
    let mut harness = Harness::new("", 80, 24);

    assert_eq!(harness.keys("a"), redraw(RedrawLevel::Full));
    harness.keys("b");
    harness.keys("c");
    assert_eq!(harness.text(), "abc");

    for _ in 0..3 {
        assert_eq!(harness.keys("<C-z>"), redraw(RedrawLevel::Full));
    }

    assert_eq!(harness.text(), "");
    assert_eq!(harness.model.text.cursor.loc, 0);
}

#[test]
fn special_insert_keys() {
    let mut harness = Harness::new("", 80, 24);

    harness.keys("x");
    harness.keys("<space>");
    harness.keys("<tab>");
    harness.keys("<cr>");
    harness.keys("Y");

    assert_eq!(harness.text(), "x \t\nY");
    assert_eq!(harness.model.text.cursor.loc, 5);
}

#[test]
fn backspace_removes_selection() {
    let mut harness = Harness::new("hello world", 80, 24);
    let text = &mut harness.model.text;
    text.cursor.set_loc(&text.buffer, 5);
    text.cursor.selection.start = 2;
    text.cursor.selection.end = 5;

    assert_eq!(harness.keys("<bs>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.text(), "he world");
    assert_eq!(harness.model.text.cursor.loc, 2);
}

#[test]
fn backspace_joins_lines_and_undo_restores_cursor() {
    let mut harness = Harness::new("ab\ncd", 80, 24);
    let text = &mut harness.model.text;
    text.cursor.set_loc(&text.buffer, 3);

    harness.keys("<bs>");
    assert_eq!(harness.text(), "abcd");
    assert_eq!(harness.model.text.cursor.loc, 2);

    harness.keys("<C-z>");
    assert_eq!(harness.text(), "ab\ncd");
    assert_eq!(harness.model.text.cursor.loc, 3);
}

#[test]
fn backspace_at_start_does_nothing() {
    let mut harness = Harness::new("ab", 80, 24);

    assert_eq!(harness.keys("<bs>"), redraw(RedrawLevel::None));
    assert_eq!(harness.text(), "ab");
}

#[test]
fn typing_replaces_selection() {
    let mut harness = Harness::new("hello world", 80, 24);
    harness.keys("<C-a>");
    harness.typed("bye");

    assert_eq!(harness.text(), "bye");
    assert!(!harness.model.text.cursor.has_selection());
}

#[test]
fn arrow_collapses_selection() {
    let mut harness = Harness::new("hello", 80, 24);
    harness.keys("<C-a>");

    assert_eq!(harness.keys("<right>"), redraw(RedrawLevel::Full));
    assert!(!harness.model.text.cursor.has_selection());
    assert_eq!(harness.model.text.cursor.loc, 1);
}

#[test]
fn copy_then_paste_over_selection_keeps_content() {
    let mut harness = Harness::new("hello world", 80, 24);
    let text = &mut harness.model.text;
    text.cursor.set_loc(&text.buffer, 6);
    text.cursor.selection.start = 6;
    text.cursor.selection.end = 11;

    assert_eq!(harness.keys("<C-c>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.clipboard.content, "world");

    let length = harness.model.text.buffer.len();
    assert_eq!(harness.keys("<C-v>"), redraw(RedrawLevel::Full));

    assert_eq!(harness.model.text.buffer.len(), length);
    assert_eq!(harness.text(), "hello world");
    assert_eq!(harness.model.text.cursor.loc, 11);
}

#[test]
fn cut_and_paste_moves_text() {
    let mut harness = Harness::new("abc def", 80, 24);
    let text = &mut harness.model.text;
    text.cursor.selection.start = 0;
    text.cursor.selection.end = 4;

    harness.keys("<C-x>");
    assert_eq!(harness.text(), "def");
    assert_eq!(harness.clipboard.content, "abc ");

    let text = &mut harness.model.text;
    text.cursor.set_loc(&text.buffer, 3);
    harness.keys("<C-v>");

    assert_eq!(harness.text(), "defabc ");
    assert_eq!(harness.model.text.cursor.loc, 7);
}

#[test]
fn clipboard_unavailable_is_noop() {
    let mut harness = Harness::new("abc", 80, 24);
    harness.clipboard.available = false;
    harness.keys("<C-a>");

    assert_eq!(harness.keys("<C-c>"), redraw(RedrawLevel::None));
    assert_eq!(harness.keys("<C-x>"), redraw(RedrawLevel::None));
    assert_eq!(harness.keys("<C-v>"), redraw(RedrawLevel::None));
    assert_eq!(harness.text(), "abc");
}

#[test]
fn failed_clipboard_read_inserts_nothing() {
    let mut harness = Harness::new("abc", 80, 24);
    harness.clipboard.fail_read = true;
    harness.keys("<C-a>");

    assert_eq!(harness.keys("<C-v>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.text(), "abc");
    assert_eq!(harness.messenger.errors.len(), 1);
}

#[test]
fn failed_clipboard_write_is_reported() {
    let mut harness = Harness::new("hello", 80, 24);
    harness.clipboard.fail_write = true;
    harness.keys("<C-a>");

    assert_eq!(harness.keys("<C-c>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.keys("<C-x>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.text(), "hello");
    assert!(harness.model.text.cursor.has_selection());
    assert_eq!(harness.messenger.errors.len(), 2);
}

#[test]
fn quit_clean_buffer_terminates() {
    let mut harness = Harness::new("abc", 80, 24);

    assert_eq!(harness.keys("<C-q>"), DispatchResult::Quit);
    assert!(harness.messenger.questions.is_empty());
}

#[test]
fn quit_dirty_buffer_asks_first() {
    let mut harness = Harness::new("abc", 80, 24);
    harness.keys("x");

    harness.messenger.answers.push_back(Some("n".to_string()));
    assert_eq!(harness.keys("<C-q>"), redraw(RedrawLevel::Full));

    harness.messenger.answers.push_back(None);
    assert_eq!(harness.keys("<C-q>"), redraw(RedrawLevel::Full));

    harness.messenger.answers.push_back(Some("yes".to_string()));
    assert_eq!(harness.keys("<C-q>"), DispatchResult::Quit);
    assert_eq!(harness.messenger.questions.len(), 3);
}

#[test]
fn save_without_path_cancelled() {
    let mut harness = Harness::new("abc", 80, 24);
    harness.keys("x");
    harness.messenger.answers.push_back(None);

    assert_eq!(harness.keys("<C-s>"), redraw(RedrawLevel::Full));
    assert!(harness.model.text.buffer.is_dirty());
    assert!(harness.messenger.errors.is_empty());
}

#[test]
fn save_failure_is_reported() {
    let mut harness = Harness::new("abc", 80, 24);
    harness.keys("x");

    let path = std::env::temp_dir()
        .join("quill-update-missing")
        .join("file.txt");
    harness
        .messenger
        .answers
        .push_back(Some(path.to_string_lossy().to_string()));

    assert_eq!(harness.keys("<C-s>"), redraw(RedrawLevel::CursorOnly));
    assert!(harness.model.text.buffer.is_dirty());
    assert_eq!(harness.messenger.errors.len(), 1);
}

#[test]
fn save_with_prompted_path_clears_dirty() {
    let mut harness = Harness::new("abc", 80, 24);
    harness.keys("x");

    let path = std::env::temp_dir().join(format!("quill-update-save-{}.txt", std::process::id()));
    harness
        .messenger
        .answers
        .push_back(Some(path.to_string_lossy().to_string()));

    assert_eq!(harness.keys("<C-s>"), redraw(RedrawLevel::CursorOnly));
    assert!(!harness.model.text.buffer.is_dirty());
    assert_eq!(harness.model.text.buffer.path.as_ref(), Some(&path));
    assert_eq!(std::fs::read_to_string(&path).expect("saved file"), "xabc");

    let _ = std::fs::remove_file(path);
}

#[test]
fn open_replaces_buffer() {
    let path = std::env::temp_dir().join(format!("quill-update-open-{}.txt", std::process::id()));
    std::fs::write(&path, "opened\nfile").expect("write failed");

    let mut harness = Harness::new(&numbered_lines(50), 80, 10);
    harness.keys("<pagedown>");
    harness.keys("z");

    harness.messenger.answers.push_back(Some("y".to_string()));
    harness
        .messenger
        .answers
        .push_back(Some(path.to_string_lossy().to_string()));

    assert_eq!(harness.keys("<C-o>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.text(), "opened\nfile");
    assert_eq!(harness.model.viewport.topline, 0);
    assert_eq!(harness.model.text.cursor.loc, 0);
    assert!(!harness.model.text.events.can_undo());
    assert_eq!(harness.model.text.buffer.path.as_ref(), Some(&PathBuf::from(&path)));

    let _ = std::fs::remove_file(path);
}

#[test]
fn open_dirty_buffer_declined_keeps_buffer() {
    let mut harness = Harness::new("keep", 80, 24);
    harness.keys("x");

    harness.messenger.answers.push_back(Some("n".to_string()));
    assert_eq!(harness.keys("<C-o>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.messenger.questions.len(), 1);

    harness.messenger.answers.push_back(None);
    assert_eq!(harness.keys("<C-o>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.messenger.questions.len(), 2);

    assert!(harness
        .messenger
        .questions
        .iter()
        .all(|question| question != "File to open: "));
    assert_eq!(harness.text(), "xkeep");
    assert!(harness.model.text.buffer.is_dirty());

    harness.keys("<C-z>");
    assert_eq!(harness.text(), "keep");
}

#[test]
fn open_missing_file_keeps_buffer() {
    let mut harness = Harness::new("keep", 80, 24);
    harness
        .messenger
        .answers
        .push_back(Some("/definitely/not/here.txt".to_string()));

    assert_eq!(harness.keys("<C-o>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.text(), "keep");
    assert_eq!(harness.messenger.errors.len(), 1);
}

#[test]
fn resize_computes_geometry() {
    let mut harness = Harness::new("abc", 80, 24);

    assert_eq!(harness.send(InputEvent::Resize(40, 12)), redraw(RedrawLevel::Full));
    assert_eq!(harness.model.viewport.height, 10);
    assert_eq!(harness.model.viewport.width, 40);

    harness.send(InputEvent::Resize(10, 1));
    assert_eq!(harness.model.viewport.height, 0);
}

#[test]
fn page_keys_scroll() {
    let mut harness = Harness::new(&numbered_lines(10), 80, 7);
    assert_eq!(harness.model.viewport.height, 5);

    assert_eq!(harness.keys("<pagedown>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.model.viewport.topline, 5);

    harness.keys("<pageup>");
    assert_eq!(harness.model.viewport.topline, 0);
}

#[test]
fn cursor_movement_follows_viewport() {
    let mut harness = Harness::new(&numbered_lines(30), 80, 7);

    for _ in 0..4 {
        assert_eq!(harness.keys("<down>"), redraw(RedrawLevel::CursorOnly));
    }

    assert_eq!(harness.keys("<down>"), redraw(RedrawLevel::Full));
    assert_eq!(harness.model.viewport.topline, 1);
}

#[test]
fn mouse_press_drag_release_selects() {
    let mut harness = Harness::new("hello world\nsecond line", 80, 24);
    let gutter = harness.model.viewport.line_number_width as u16;

    assert_eq!(
        harness.mouse(gutter + 2, 0, MouseButton::Primary),
        redraw(RedrawLevel::Full)
    );
    assert_eq!(harness.model.mouse, MouseState::Selecting);
    assert_eq!(harness.model.text.cursor.loc, 2);

    harness.mouse(gutter + 3, 1, MouseButton::Primary);
    assert_eq!(harness.model.text.cursor.loc, 15);
    assert_eq!(harness.model.text.selection_text(), "llo world\nsec");

    let cursor = harness.model.text.cursor.clone();
    assert_eq!(
        harness.mouse(0, 0, MouseButton::None),
        redraw(RedrawLevel::None)
    );
    assert_eq!(harness.model.mouse, MouseState::Idle);
    assert_eq!(harness.model.text.cursor, cursor);

    harness.mouse(gutter, 0, MouseButton::Primary);
    assert!(!harness.model.text.cursor.has_selection());
}

#[test]
fn mouse_press_maps_tab_cells() {
    let mut harness = Harness::new("\tab", 80, 24);
    let gutter = harness.model.viewport.line_number_width as u16;

    harness.mouse(gutter + 2, 0, MouseButton::Primary);
    assert_eq!(harness.model.text.cursor.loc, 0);

    harness.mouse(0, 0, MouseButton::None);
    harness.mouse(gutter + 5, 0, MouseButton::Primary);
    assert_eq!(harness.model.text.cursor.loc, 2);
}

#[test]
fn mouse_press_below_text_clamps_to_last_line() {
    let mut harness = Harness::new("ab\ncd", 80, 24);
    let gutter = harness.model.viewport.line_number_width as u16;

    harness.mouse(gutter + 40, 10, MouseButton::Primary);

    let cursor = &harness.model.text.cursor;
    assert_eq!((cursor.x, cursor.y), (2, 1));
}

#[test]
fn mouse_wheel_scrolls_by_two() {
    let mut harness = Harness::new(&numbered_lines(30), 80, 12);

    assert_eq!(
        harness.mouse(0, 0, MouseButton::WheelDown),
        redraw(RedrawLevel::Full)
    );
    assert_eq!(harness.model.viewport.topline, 2);

    harness.mouse(0, 0, MouseButton::WheelUp);
    assert_eq!(harness.model.viewport.topline, 0);
}
