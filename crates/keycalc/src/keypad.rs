//! Keypad button layout
//!
//! Buttons sit on a 5×4 grid; `AC` and `=` span two columns:
//!
//! ```text
//! [   AC   ] [DEL] [ ÷ ]
//! [ 1 ] [ 2 ] [ 3 ] [ * ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ . ] [ 0 ] [    =    ]
//! ```

use crate::adapter::InputAction;
use crate::core::Operator;

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text printed on the button
    pub label: String,
    /// Action performed when pressed
    pub action: InputAction,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-column button labelled after its action
    #[must_use]
    pub fn new(action: InputAction, row: usize, col: usize) -> Self {
        Self {
            label: action.label(),
            action,
            row,
            col,
            span: 1,
            pressed: false,
        }
    }

    /// Widens the button to `span` columns
    #[must_use]
    pub fn spanning(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// Returns true if the button covers grid cell (row, col)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard layout
    #[must_use]
    pub fn new() -> Self {
        let digit = |d: char, row, col| KeypadButton::new(InputAction::Append(d), row, col);
        let op = |o: Operator, row, col| KeypadButton::new(InputAction::Operator(o), row, col);

        let buttons = vec![
            KeypadButton::new(InputAction::Clear, 0, 0).spanning(2),
            KeypadButton::new(InputAction::Delete, 0, 2),
            op(Operator::Divide, 0, 3),
            digit('1', 1, 0),
            digit('2', 1, 1),
            digit('3', 1, 2),
            op(Operator::Multiply, 1, 3),
            digit('4', 2, 0),
            digit('5', 2, 1),
            digit('6', 2, 2),
            op(Operator::Add, 2, 3),
            digit('7', 3, 0),
            digit('8', 3, 1),
            digit('9', 3, 2),
            op(Operator::Subtract, 3, 3),
            digit('.', 4, 0),
            digit('0', 4, 1),
            KeypadButton::new(InputAction::Compute, 4, 2).spanning(2),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering grid cell (row, col)
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Button covering grid cell (row, col)
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Index of the button performing `action`
    #[must_use]
    pub fn find_by_action(&self, action: InputAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Index of the button with the given label
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.label == label)
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button performing `action`, if any
    pub fn highlight(&mut self, action: InputAction) {
        self.release_all();
        if let Some(btn) = self
            .find_by_action(action)
            .and_then(|i| self.buttons.get_mut(i))
        {
            btn.set_pressed(true);
        }
    }

    /// Index of the currently highlighted button
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Iterates over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_size() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 18);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_every_cell_is_covered_once() {
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let covering = keypad.buttons().filter(|b| b.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_spanning_buttons() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(0, 0).unwrap().action, InputAction::Clear);
        assert_eq!(keypad.button_at(0, 1).unwrap().action, InputAction::Clear);
        assert_eq!(keypad.button_at(4, 2).unwrap().action, InputAction::Compute);
        assert_eq!(keypad.button_at(4, 3).unwrap().action, InputAction::Compute);
    }

    #[test]
    fn test_button_at_out_of_range() {
        let keypad = Keypad::new();
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
    }

    #[test]
    fn test_all_digits_present() {
        let keypad = Keypad::new();
        for d in '0'..='9' {
            assert!(keypad.find_by_action(InputAction::Append(d)).is_some(), "{d}");
        }
        assert!(keypad.find_by_action(InputAction::Append('.')).is_some());
    }

    #[test]
    fn test_all_operators_present() {
        let keypad = Keypad::new();
        for op in Operator::ALL {
            assert!(keypad.find_by_action(InputAction::Operator(op)).is_some());
        }
    }

    #[test]
    fn test_find_by_label() {
        let keypad = Keypad::new();
        let idx = keypad.find_by_label("÷").unwrap();
        assert_eq!(
            keypad.get_button(idx).unwrap().action,
            InputAction::Operator(Operator::Divide)
        );
        assert!(keypad.find_by_label("%").is_none());
    }

    #[test]
    fn test_highlight_and_release() {
        let mut keypad = Keypad::new();
        keypad.highlight(InputAction::Append('5'));
        let idx = keypad.highlighted().unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label, "5");

        keypad.highlight(InputAction::Compute);
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);

        keypad.release_all();
        assert!(keypad.highlighted().is_none());
    }

    #[test]
    fn test_spanning_minimum_is_one() {
        let btn = KeypadButton::new(InputAction::Compute, 0, 0).spanning(0);
        assert_eq!(btn.span, 1);
    }
}
