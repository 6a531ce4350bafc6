//! Keyboard input types
//!
//! The host translates its native key events into [`KeyEvent`] values and the
//! [`crate::Application`] forwards them to the game's key hooks.

use bitflags::bitflags;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A letter or digit key, lowercase
    Char(char),
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Parse a key name such as `"a"`, `"Space"` or `"Left"`
    ///
    /// Names follow the common toolkit keysym spelling; single characters map to [`KeyCode::Char`].
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "space" | "Space" => Self::Space,
            "Return" | "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            "Tab" => Self::Tab,
            "BackSpace" | "Backspace" => Self::Backspace,
            "Up" => Self::Up,
            "Down" => Self::Down,
            "Left" => Self::Left,
            "Right" => Self::Right,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphanumeric() => Self::Char(c.to_ascii_lowercase()),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

bitflags! {
    /// Modifier keys held while a key event fired
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift held
        const SHIFT = 0b0001;
        /// Control held
        const CONTROL = 0b0010;
        /// Alt held
        const ALT = 0b0100;
    }
}

/// A key press or release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key
    pub key: KeyCode,
    /// Modifiers held at the time
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Key event without modifiers
    pub fn new(key: KeyCode) -> Self {
        Self { key, modifiers: Modifiers::empty() }
    }

    /// Key event with modifiers
    pub fn with_modifiers(key: KeyCode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(key: KeyCode) -> Self {
        Self::new(key)
    }
}
