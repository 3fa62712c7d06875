//! Input adapter: maps user actions onto engine calls
//!
//! Front ends translate their own events (terminal keys, button clicks,
//! script tokens) into [`InputAction`] values; applying an action is the
//! only way they mutate the engine.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CalculatorEngine, Operand, Operator};

/// A discrete user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum InputAction {
    /// Digit or decimal point press
    Append(char),
    /// Operator press
    Operator(Operator),
    /// Equals / confirm
    Compute,
    /// Backspace or Delete
    Delete,
    /// All clear
    Clear,
}

impl InputAction {
    /// Maps a single typed character to an action.
    ///
    /// `=` confirms; digits, the decimal point and operator symbols map to
    /// their presses. Everything else is ignored.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if Operand::is_entry_token(c) {
            return Some(Self::Append(c));
        }
        if c == '=' {
            return Some(Self::Compute);
        }
        Operator::from_char(c).map(Self::Operator)
    }

    /// Maps a key name to an action.
    ///
    /// Accepts single characters (see [`InputAction::from_char`]) and the
    /// named keys `Enter`, `Backspace`, `Escape`/`Esc`, `Delete`/`Del`,
    /// plus the keypad words `AC`, `DEL` and `C`. Names are
    /// case-insensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.eq_ignore_ascii_case(&'c') {
                return Some(Self::Clear);
            }
            return Self::from_char(c);
        }

        match key.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Self::Compute),
            "backspace" | "bs" => Some(Self::Delete),
            "delete" | "del" => Some(Self::Delete),
            "escape" | "esc" | "ac" | "clear" => Some(Self::Clear),
            _ => None,
        }
    }

    /// Applies the action to an engine
    pub fn apply(self, engine: &mut CalculatorEngine) {
        trace!(action = ?self, "apply");
        match self {
            Self::Append(c) => engine.append(c),
            Self::Operator(op) => engine.choose_operator(op),
            Self::Compute => engine.compute(),
            Self::Delete => engine.delete_last(),
            Self::Clear => engine.clear(),
        }
    }

    /// Short label, as printed on a keypad button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Append(c) => c.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Compute => "=".to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Clear => "AC".to_string(),
        }
    }
}

/// Key binding table: (keys, action description)
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("0-9", "Enter digit"),
    (".", "Decimal point"),
    ("+ - * /", "Choose operator"),
    ("x × ÷", "Alternate operator keys"),
    ("Enter =", "Compute"),
    ("Backspace Del", "Delete last character"),
    ("Esc", "All clear"),
];
