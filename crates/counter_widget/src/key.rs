//! Keyboard input.
//!
//! The host translates raw terminal key events into [`KeyMsg`] values before
//! handing them to the widget. Only the keys the counter binds get their own
//! [`KeyType`]; everything else arrives as [`KeyType::Other`].

use std::fmt;

/// Keyboard key event message.
///
/// # Example
///
/// ```rust
/// use counter_widget::{KeyMsg, KeyType};
///
/// let key = KeyMsg::from_char('+');
/// assert_eq!(key.key_type, KeyType::Runes);
/// assert_eq!(key.rune(), Some('+'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMsg {
    /// The type of key pressed.
    pub key_type: KeyType,
    /// For [`KeyType::Runes`], the characters typed.
    pub runes: Vec<char>,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyMsg {
    /// Create a new key message from a key type.
    pub fn from_type(key_type: KeyType) -> Self {
        Self {
            key_type,
            runes: Vec::new(),
            alt: false,
        }
    }

    /// Create a new key message from a character.
    pub fn from_char(c: char) -> Self {
        Self {
            key_type: KeyType::Runes,
            runes: vec![c],
            alt: false,
        }
    }

    /// Set the alt modifier.
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// The single character typed, if this is a one-rune key press.
    pub fn rune(&self) -> Option<char> {
        match (self.key_type, self.runes.as_slice()) {
            (KeyType::Runes, [c]) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for KeyMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.key_type == KeyType::Runes {
            for c in &self.runes {
                write!(f, "{c}")?;
            }
        } else {
            write!(f, "{}", self.key_type)?;
        }
        Ok(())
    }
}

/// Key type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    /// Regular character(s) input.
    Runes,
    /// Enter.
    Enter,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Shift+Tab.
    ShiftTab,
    /// Escape.
    Esc,
    /// Backspace.
    Backspace,
    /// Break/Interrupt (Ctrl+C).
    CtrlC,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Any key the counter does not bind.
    Other,
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Runes => "runes",
            Self::Enter => "enter",
            Self::Space => "space",
            Self::Tab => "tab",
            Self::ShiftTab => "shift+tab",
            Self::Esc => "esc",
            Self::Backspace => "backspace",
            Self::CtrlC => "ctrl+c",
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Other => "other",
        };
        write!(f, "{name}")
    }
}
