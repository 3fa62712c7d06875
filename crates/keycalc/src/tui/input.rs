//! Keyboard and mouse input for the TUI

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use super::keypad::hit_test;
use crate::adapter::InputAction;
use crate::keypad::Keypad;

/// What a terminal event asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Drive the calculator
    Input(InputAction),
    /// Press the keypad button at this index
    Click(usize),
    /// Quit the application
    Quit,
    /// Ignored input
    None,
}

/// Maps crossterm events to actions
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
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Input(InputAction::Clear),
                _ => KeyAction::None,
            };
        }

        let action = match code {
            KeyCode::Char('q') => return KeyAction::Quit,
            KeyCode::Char(c) => InputAction::from_key(&c.to_string()),
            KeyCode::Enter => Some(InputAction::Compute),
            KeyCode::Backspace | KeyCode::Delete => Some(InputAction::Delete),
            KeyCode::Esc => Some(InputAction::Clear),
            _ => None,
        };

        action.map_or(KeyAction::None, KeyAction::Input)
    }

    /// Maps a mouse event to a keypad click.
    ///
    /// `keypad_area` is where the keypad widget was last drawn.
    #[must_use]
    pub fn handle_mouse(
        &self,
        event: MouseEvent,
        keypad: &Keypad,
        keypad_area: Rect,
    ) -> KeyAction {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return KeyAction::None;
        }
        hit_test(keypad, keypad_area, event.column, event.row)
            .map_or(KeyAction::None, KeyAction::Click)
    }
}
