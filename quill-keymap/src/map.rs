use std::collections::HashMap;

use crate::{
    key::{Key, KeyCode},
    message::KeyAction,
    KeyMapError,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Key, KeyAction>,
}

impl KeyMap {
    pub fn add_mapping(&mut self, keycode: &str, action: KeyAction) -> Result<(), KeyMapError> {
        let key = Key::from_keycode_string(keycode)
            .ok_or_else(|| KeyMapError::InvalidKeycode(keycode.to_string()))?;

        if let Some(previous) = self.mappings.insert(key, action) {
            tracing::debug!("mapping for {} replaced {:?}", keycode, previous);
        }

        Ok(())
    }

    /// Resolves a bound action first. Unbound characters typed without
    /// modifiers other than shift fall back to a character insert.
    pub fn resolve(&self, key: &Key) -> Option<KeyAction> {
        if let Some(action) = self.mappings.get(key) {
            return Some(action.clone());
        }

        if !key.is_plain() {
            return None;
        }

        match key.code {
            KeyCode::Char(c) if key.is_shifted() => Some(KeyAction::Char(to_upper(c))),
            KeyCode::Char(c) => Some(KeyAction::Char(c)),
            KeyCode::LessThan => Some(KeyAction::Char('<')),
            _ => None,
        }
    }
}

fn to_upper(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = Self {
            mappings: HashMap::new(),
        };

        let bindings = [
            ("<left>", KeyAction::Left),
            ("<right>", KeyAction::Right),
            ("<up>", KeyAction::Up),
            ("<down>", KeyAction::Down),
            ("<cr>", KeyAction::Enter),
            ("<space>", KeyAction::Space),
            ("<S-space>", KeyAction::Space),
            ("<tab>", KeyAction::Tab),
            ("<bs>", KeyAction::Backspace),
            ("<pageup>", KeyAction::PageUp),
            ("<pagedown>", KeyAction::PageDown),
            ("<C-a>", KeyAction::SelectAll),
            ("<C-c>", KeyAction::Copy),
            ("<C-d>", KeyAction::HalfPageDown),
            ("<C-o>", KeyAction::Open),
            ("<C-q>", KeyAction::Quit),
            ("<C-s>", KeyAction::Save),
            ("<C-u>", KeyAction::HalfPageUp),
            ("<C-v>", KeyAction::Paste),
            ("<C-x>", KeyAction::Cut),
            ("<C-y>", KeyAction::Redo),
            ("<C-z>", KeyAction::Undo),
        ];

        for (keycode, action) in bindings {
            if let Err(error) = map.add_mapping(keycode, action) {
                tracing::error!("default key binding rejected: {}", error);
            }
        }

        map
    }
}
