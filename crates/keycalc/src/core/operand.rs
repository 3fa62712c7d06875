//! Operand values held by the engine
//!
//! Operands stay as the text the user typed until arithmetic needs them,
//! so trailing zeros and a trailing point survive on the display.

/// Decimal point character accepted during entry
pub const POINT: char = '.';

/// A single operand
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Digits typed by the user, at most one decimal point
    Typed(String),
    /// Result of a computation, formatted only at display time
    Computed(f64),
}

impl Operand {
    /// Starts a new typed operand from its first token
    #[must_use]
    pub fn start(token: char) -> Self {
        Self::Typed(token.to_string())
    }

    /// Returns true if `token` can be entered into an operand at all
    #[must_use]
    pub fn is_entry_token(token: char) -> bool {
        token.is_ascii_digit() || token == POINT
    }

    /// Returns the operand as plain decimal text.
    ///
    /// Computed values use the shortest text that round-trips; non-finite
    /// values come back as `inf`, `-inf` or `NaN`.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Typed(s) => s.clone(),
            Self::Computed(v) => computed_text(*v),
        }
    }

    /// Parses the operand as a number, `None` when it is not numeric
    /// (a lone decimal point, or a NaN result). Infinities are numeric.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Typed(s) => s.parse::<f64>().ok(),
            Self::Computed(v) => Some(*v),
        };
        value.filter(|v| !v.is_nan())
    }

    /// Returns true if the operand already holds a decimal point
    #[must_use]
    pub fn has_point(&self) -> bool {
        match self {
            Self::Typed(s) => s.contains(POINT),
            Self::Computed(v) => v.is_finite() && self.text().contains(POINT),
        }
    }

    /// Converts the operand into editable text.
    ///
    /// A non-finite computed value has no meaningful digits to extend, so it
    /// becomes empty and the next token starts a fresh operand.
    fn into_editable(self) -> String {
        match self {
            Self::Typed(s) => s,
            Self::Computed(v) if v.is_finite() => computed_text(v),
            Self::Computed(_) => String::new(),
        }
    }

    /// Appends an entry token, ignoring a second decimal point
    #[must_use]
    pub fn pushed(self, token: char) -> Self {
        if token == POINT && self.has_point() {
            return self;
        }
        let mut text = self.into_editable();
        text.push(token);
        Self::Typed(text)
    }

    /// Removes the last character, `None` once nothing is left
    #[must_use]
    pub fn popped(self) -> Option<Self> {
        let mut text = self.into_editable();
        text.pop();
        if text.is_empty() {
            None
        } else {
            Some(Self::Typed(text))
        }
    }
}

fn computed_text(v: f64) -> String {
    format!("{v}")
}
