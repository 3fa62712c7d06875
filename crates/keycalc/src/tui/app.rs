//! TUI application state

use tracing::debug;

use crate::adapter::InputAction;
use crate::core::{CalculatorEngine, DisplayPair, FormatConfig};
use crate::keypad::Keypad;

/// Terminal calculator: engine, keypad highlight state and quit flag
#[derive(Debug, Default)]
pub struct CalculatorApp {
    engine: CalculatorEngine,
    keypad: Keypad,
    last_action: Option<InputAction>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app with the default locale
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app with an explicit formatting configuration
    #[must_use]
    pub fn with_format(format: FormatConfig) -> Self {
        Self {
            engine: CalculatorEngine::with_format(format),
            ..Self::default()
        }
    }

    /// Returns the engine
    #[must_use]
    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Formatted display lines
    #[must_use]
    pub fn display(&self) -> DisplayPair {
        self.engine.display()
    }

    /// Last applied action
    #[must_use]
    pub fn last_action(&self) -> Option<InputAction> {
        self.last_action
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies an action and highlights its keypad button
    pub fn apply(&mut self, action: InputAction) {
        action.apply(&mut self.engine);
        self.keypad.highlight(action);
        self.last_action = Some(action);
    }

    /// Presses the keypad button at `index`; out-of-range is ignored
    pub fn click_button(&mut self, index: usize) {
        let Some(action) = self.keypad.get_button(index).map(|b| b.action) else {
            debug!(index, "click outside keypad");
            return;
        };
        self.apply(action);
    }

    /// Releases the keypad highlight
    pub fn release_keys(&mut self) {
        self.keypad.release_all();
    }

    /// Status line for the footer
    #[must_use]
    pub fn status(&self) -> String {
        let locale = self.engine.format_config().locale;
        match self.last_action {
            None => format!("Ready · {locale}"),
            Some(action) => format!("{} · {} · {locale}", action.label(), self.engine.tag()),
        }
    }
}
