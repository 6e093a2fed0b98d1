//! Translation of crossterm events into widget messages.

use crossterm::event::{
    KeyCode, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
};

use counter_widget::{KeyMsg, KeyType, MouseAction, MouseButton, MouseMsg};

/// Convert a crossterm key code and modifiers to a [`KeyMsg`].
pub fn from_crossterm_key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);

    let (key_type, runes) = match code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'c' => (KeyType::CtrlC, Vec::new()),
            'i' => (KeyType::Tab, Vec::new()),
            'm' => (KeyType::Enter, Vec::new()),
            _ => (KeyType::Other, Vec::new()),
        },
        KeyCode::Char(' ') => (KeyType::Space, Vec::new()),
        KeyCode::Char(c) => (KeyType::Runes, vec![c]),
        KeyCode::Enter => (KeyType::Enter, Vec::new()),
        KeyCode::Backspace => (KeyType::Backspace, Vec::new()),
        KeyCode::Tab if shift => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Tab => (KeyType::Tab, Vec::new()),
        KeyCode::BackTab => (KeyType::ShiftTab, Vec::new()),
        KeyCode::Esc => (KeyType::Esc, Vec::new()),
        KeyCode::Up => (KeyType::Up, Vec::new()),
        KeyCode::Down => (KeyType::Down, Vec::new()),
        KeyCode::Left => (KeyType::Left, Vec::new()),
        KeyCode::Right => (KeyType::Right, Vec::new()),
        _ => (KeyType::Other, Vec::new()),
    };

    KeyMsg {
        key_type,
        runes,
        alt,
    }
}

/// Convert a crossterm mouse event to a [`MouseMsg`].
pub fn from_crossterm_mouse(event: MouseEvent) -> MouseMsg {
    let action = match event.kind {
        MouseEventKind::Down(_)
        | MouseEventKind::ScrollUp
        | MouseEventKind::ScrollDown
        | MouseEventKind::ScrollLeft
        | MouseEventKind::ScrollRight => MouseAction::Press,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Drag(_) | MouseEventKind::Moved => MouseAction::Motion,
    };

    let button = match event.kind {
        MouseEventKind::Down(b) | MouseEventKind::Up(b) | MouseEventKind::Drag(b) => match b {
            CtButton::Left => MouseButton::Left,
            CtButton::Right => MouseButton::Right,
            CtButton::Middle => MouseButton::Middle,
        },
        MouseEventKind::ScrollUp => MouseButton::WheelUp,
        MouseEventKind::ScrollDown => MouseButton::WheelDown,
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight | MouseEventKind::Moved => {
            MouseButton::None
        }
    };

    MouseMsg {
        x: event.column,
        y: event.row,
        action,
        button,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chars_become_runes() {
        let key = from_crossterm_key(KeyCode::Char('+'), KeyModifiers::NONE);
        assert_eq!(key, KeyMsg::from_char('+'));

        let key = from_crossterm_key(KeyCode::Char('k'), KeyModifiers::ALT);
        assert_eq!(key, KeyMsg::from_char('k').with_alt());
    }

    #[test]
    fn ctrl_c_is_interrupt_key() {
        let key = from_crossterm_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::CtrlC);
        let key = from_crossterm_key(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert_eq!(key.key_type, KeyType::Other);
    }

    #[test]
    fn special_keys() {
        let cases = [
            (KeyCode::Char(' '), KeyModifiers::NONE, KeyType::Space),
            (KeyCode::Enter, KeyModifiers::NONE, KeyType::Enter),
            (KeyCode::Tab, KeyModifiers::NONE, KeyType::Tab),
            (KeyCode::Tab, KeyModifiers::SHIFT, KeyType::ShiftTab),
            (KeyCode::BackTab, KeyModifiers::SHIFT, KeyType::ShiftTab),
            (KeyCode::Esc, KeyModifiers::NONE, KeyType::Esc),
            (KeyCode::Up, KeyModifiers::NONE, KeyType::Up),
            (KeyCode::Down, KeyModifiers::NONE, KeyType::Down),
            (KeyCode::F(5), KeyModifiers::NONE, KeyType::Other),
        ];
        for (code, mods, expected) in cases {
            assert_eq!(from_crossterm_key(code, mods).key_type, expected, "{code:?}");
        }
    }

    #[test]
    fn left_down_is_click() {
        let event = MouseEvent {
            kind: MouseEventKind::Down(CtButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        let mouse = from_crossterm_mouse(event);
        assert_eq!(mouse, MouseMsg::left_press(4, 2));
        assert!(mouse.is_click());
    }

    #[test]
    fn motion_and_release_are_not_clicks() {
        for kind in [
            MouseEventKind::Up(CtButton::Left),
            MouseEventKind::Drag(CtButton::Left),
            MouseEventKind::Moved,
            MouseEventKind::ScrollDown,
        ] {
            let event = MouseEvent {
                kind,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            };
            assert!(!from_crossterm_mouse(event).is_click(), "{kind:?}");
        }
    }
}
