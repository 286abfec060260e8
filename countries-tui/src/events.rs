//! Terminal events, reduced to what the widget reacts to.

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};

use countries_lib::NavKey;

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// A key with no meaning here (F-keys, Tab, ...).
    Unhandled,
}

impl Key {
    /// The navigation key the suggestion controller sees.
    pub fn nav_key(self) -> NavKey {
        match self {
            Key::Up => NavKey::Up,
            Key::Down => NavKey::Down,
            Key::Enter => NavKey::Enter,
            _ => NavKey::Other,
        }
    }
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => Key::Unhandled,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// `ctrl` is false for AltGr, which arrives as Ctrl+Alt.
    Key { key: Key, ctrl: bool },
    /// Left mouse button pressed at a cell.
    Click { column: u16, row: u16 },
    Paste(String),
    Resize,
}

/// Convert a crossterm event, dropping the ones the widget ignores.
pub fn convert_event(event: CrosstermEvent) -> Option<AppEvent> {
    match event {
        CrosstermEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) => {
            // Only presses; some platforms also report repeats and releases
            if kind != KeyEventKind::Press {
                return None;
            }
            let altgr = modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
            Some(AppEvent::Key {
                key: code.into(),
                ctrl: modifiers.contains(KeyModifiers::CONTROL) && !altgr,
            })
        }
        CrosstermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(AppEvent::Click { column, row }),
        CrosstermEvent::Paste(text) => Some(AppEvent::Paste(text)),
        CrosstermEvent::Resize(_, _) => Some(AppEvent::Resize),
        _ => None,
    }
}
