//! Keyboard input handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Press a digit key (0-9)
    Digit(u8),
    /// Clear the entered amount
    Clear,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Clear,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_digit() => KeyAction::Digit(c as u8 - b'0'),
            KeyCode::Char('c' | 'C') | KeyCode::Esc | KeyCode::Delete => KeyAction::Clear,
            KeyCode::Char('q') => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}
