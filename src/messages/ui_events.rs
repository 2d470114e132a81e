//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer.
///
/// Events are screen-agnostic; the active screen decides what they mean
/// for its focused control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    // Focus
    FocusNext,
    FocusPrev,

    // Text editing
    CharInput(char),
    Paste(String),
    Backspace,
    CursorLeft,
    CursorRight,

    /// Press the focused control (Enter in a text field submits the form)
    Activate,
    /// Close the modal or go back
    Back,
    ToggleTheme,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::F(1) => Some(UiEvent::ToggleHelp),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::FocusPrev),
        KeyCode::Enter => Some(UiEvent::Activate),
        KeyCode::Esc => Some(UiEvent::Back),
        KeyCode::Backspace => Some(UiEvent::Backspace),
        KeyCode::Left => Some(UiEvent::CursorLeft),
        KeyCode::Right => Some(UiEvent::CursorRight),
        KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
        _ => None,
    }
}
