use std::{collections::VecDeque, fmt, hash::Hash};

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(key: KeyCode, modifiers: Vec<KeyModifier>) -> Self {
        Self {
            code: key,
            modifiers,
        }
    }

    pub fn is_shifted(&self) -> bool {
        self.modifiers.contains(&KeyModifier::Shift)
    }

    /// True if the key carries no modifier besides shift.
    pub fn is_plain(&self) -> bool {
        self.modifiers
            .iter()
            .all(|modifier| *modifier == KeyModifier::Shift)
    }

    /// Parses vim like notation: `a`, `A`, `<cr>`, `<C-s>`, `<A-C-->`.
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        let regex = regex::Regex::new(r"[^-<>]+|^-$|--").ok()?;
        let mut codes = regex
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect::<VecDeque<_>>();

        let mut modifiers = Vec::new();
        let mut last = codes.pop_back()?;
        if last == "--" {
            last = "-";
        }

        if last.chars().count() == 1 && last.chars().last()?.is_ascii_uppercase() {
            modifiers.push(KeyModifier::Shift);
        }

        for modifier in codes {
            match modifier.to_ascii_uppercase().as_str() {
                "A" => modifiers.push(KeyModifier::Alt),
                "C" => modifiers.push(KeyModifier::Ctrl),
                "D" => modifiers.push(KeyModifier::Command),
                "S" => modifiers.push(KeyModifier::Shift),
                _ => (),
            }
        }

        KeyCode::from_keycode_string(last).map(|code| Self { code, modifiers })
    }
}

impl Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        if self.code != other.code {
            return false;
        }

        if self.modifiers.len() != other.modifiers.len() {
            return false;
        }

        self.modifiers
            .iter()
            .all(|modifier| other.modifiers.contains(modifier))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();

        let key = match self.code {
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            _ => get_key_string(self.code.to_string(), modifiers, true),
        };

        f.write_str(&key)
    }
}

fn get_key_string(code: String, modifiers: Vec<KeyModifier>, force_ltgt: bool) -> String {
    if modifiers.is_empty() && !force_ltgt {
        return code;
    }

    let mut result = String::from("<");
    for modifier in modifiers {
        match modifier {
            KeyModifier::Alt => result.push_str("A-"),
            KeyModifier::Command => result.push_str("D-"),
            KeyModifier::Ctrl => result.push_str("C-"),
            KeyModifier::Shift => result.push_str("S-"),
        };
    }

    result.push_str(&code);
    result.push('>');

    result
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backspace,
    Char(char),
    Down,
    Enter,
    Left,
    LessThan,
    PageDown,
    PageUp,
    Right,
    Space,
    Tab,
    Up,
}

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        match keycode {
            "bs" => Some(KeyCode::Backspace),
            "down" => Some(KeyCode::Down),
            "cr" => Some(KeyCode::Enter),
            "left" => Some(KeyCode::Left),
            "lt" => Some(KeyCode::LessThan),
            "pagedown" => Some(KeyCode::PageDown),
            "pageup" => Some(KeyCode::PageUp),
            "right" => Some(KeyCode::Right),
            "space" => Some(KeyCode::Space),
            "tab" => Some(KeyCode::Tab),
            "up" => Some(KeyCode::Up),
            code => {
                let mut chars = code.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::from_char(c)),
                    _ => None,
                }
            }
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        match c {
            '<' => KeyCode::LessThan,
            ' ' => KeyCode::Space,
            '\t' => KeyCode::Tab,
            passed => KeyCode::Char(passed.to_ascii_lowercase()),
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Backspace => f.write_str("bs"),
            KeyCode::Char(c) => write!(f, "{}", c.to_lowercase()),
            KeyCode::Down => f.write_str("down"),
            KeyCode::Enter => f.write_str("cr"),
            KeyCode::Left => f.write_str("left"),
            KeyCode::LessThan => f.write_str("lt"),
            KeyCode::PageDown => f.write_str("pagedown"),
            KeyCode::PageUp => f.write_str("pageup"),
            KeyCode::Right => f.write_str("right"),
            KeyCode::Space => f.write_str("space"),
            KeyCode::Tab => f.write_str("tab"),
            KeyCode::Up => f.write_str("up"),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Command,
    Ctrl,
    Shift,
}
