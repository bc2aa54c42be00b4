use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeybindingAction {
    NavigateLeft,
    NavigateRight,
    NavigateUp,
    NavigateDown,
    OpenCard,
    CloseCard,
}

#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: &'static str,
    pub short_description: &'static str,
}

impl Keybinding {
    const fn new(key: &'static str, short_description: &'static str) -> Self {
        Self {
            key,
            short_description,
        }
    }
}

const BOARD_BINDINGS: &[Keybinding] = &[
    Keybinding::new("←→/hl", "lists"),
    Keybinding::new("↑↓/jk", "cards"),
    Keybinding::new("enter", "open card"),
    Keybinding::new("q", "quit"),
];

const POPUP_BINDINGS: &[Keybinding] = &[
    Keybinding::new("esc", "close"),
    Keybinding::new("q", "quit"),
];

/// Resolve a key press. While the card popup is open only closing it is bound.
pub fn action_for(key: &KeyEvent, popup_open: bool) -> Option<KeybindingAction> {
    if popup_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Enter => {
                Some(KeybindingAction::CloseCard)
            }
            _ => None,
        };
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(KeybindingAction::NavigateLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(KeybindingAction::NavigateRight),
        KeyCode::Up | KeyCode::Char('k') => Some(KeybindingAction::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(KeybindingAction::NavigateDown),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeybindingAction::OpenCard),
        _ => None,
    }
}

pub fn hints(popup_open: bool) -> &'static [Keybinding] {
    if popup_open {
        POPUP_BINDINGS
    } else {
        BOARD_BINDINGS
    }
}
