use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};

use crate::{
    key::{Key, KeyCode, KeyModifier},
    message::{InputEvent, MouseButton, MouseEvent},
};

pub fn to_input_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => to_key(key).map(InputEvent::Key),
        Event::Mouse(mouse) => to_mouse(mouse).map(InputEvent::Mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize(*width, *height)),
        _ => None,
    }
}

pub fn to_key(event: &KeyEvent) -> Option<Key> {
    let mut modifier: Vec<_> = event
        .modifiers
        .iter_names()
        .flat_map(|(s, _)| to_modifier(s))
        .collect();

    match event.code {
        event::KeyCode::Backspace => resolve(event.kind, KeyCode::Backspace, modifier),
        event::KeyCode::Enter => resolve(event.kind, KeyCode::Enter, modifier),
        event::KeyCode::Left => resolve(event.kind, KeyCode::Left, modifier),
        event::KeyCode::Right => resolve(event.kind, KeyCode::Right, modifier),
        event::KeyCode::Up => resolve(event.kind, KeyCode::Up, modifier),
        event::KeyCode::Down => resolve(event.kind, KeyCode::Down, modifier),
        event::KeyCode::PageUp => resolve(event.kind, KeyCode::PageUp, modifier),
        event::KeyCode::PageDown => resolve(event.kind, KeyCode::PageDown, modifier),
        event::KeyCode::Tab => resolve(event.kind, KeyCode::Tab, modifier),
        event::KeyCode::Char(c) => {
            if c.is_uppercase() && !modifier.contains(&KeyModifier::Shift) {
                modifier.push(KeyModifier::Shift);
            }
            resolve(event.kind, KeyCode::from_char(c), modifier)
        }
        _ => None,
    }
}

fn to_mouse(event: &event::MouseEvent) -> Option<MouseEvent> {
    let button = match event.kind {
        MouseEventKind::Down(event::MouseButton::Left)
        | MouseEventKind::Drag(event::MouseButton::Left) => MouseButton::Primary,
        MouseEventKind::Up(_) | MouseEventKind::Moved => MouseButton::None,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        _ => return None,
    };

    Some(MouseEvent {
        column: event.column,
        row: event.row,
        button,
    })
}

fn resolve(kind: KeyEventKind, code: KeyCode, modifier: Vec<KeyModifier>) -> Option<Key> {
    if kind == KeyEventKind::Release {
        return None;
    }

    Some(Key::new(code, modifier))
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "HYPER" => Some(KeyModifier::Command),
        "META" => Some(KeyModifier::Alt),
        "SHIFT" => Some(KeyModifier::Shift),
        "SUPER" => Some(KeyModifier::Command),
        _ => None,
    }
}
