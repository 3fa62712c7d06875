//! Front-end independent driver
//!
//! Behavioural checks are written once against [`CalculatorDriver`] and run
//! against every front end: the plain [`Session`] and, with the `tui`
//! feature, the terminal app.

use crate::core::DisplayPair;
use crate::display::{DisplayRenderer, Session};

/// Abstract driver for keypad interactions
pub trait CalculatorDriver {
    /// Presses a key by name (`"7"`, `"+"`, `"Enter"`, `"Backspace"`, ...).
    /// Returns false when the key is not bound.
    fn press(&mut self, key: &str) -> bool;

    /// Returns the formatted display
    fn display(&self) -> DisplayPair;

    /// Presses the all-clear key
    fn clear(&mut self) {
        self.press("Escape");
    }

    /// Presses each key in turn
    fn press_all(&mut self, keys: &[&str]) {
        for key in keys {
            self.press(key);
        }
    }
}

impl<R: DisplayRenderer> CalculatorDriver for Session<R> {
    fn press(&mut self, key: &str) -> bool {
        self.press_key(key)
    }

    fn display(&self) -> DisplayPair {
        self.engine().display()
    }
}

/// TUI driver wrapping the terminal app
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::adapter::InputAction;
    use crate::core::DisplayPair;
    use crate::tui::CalculatorApp;

    /// Drives a [`CalculatorApp`] through its keypad, the way mouse clicks do
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a driver around a fresh app
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a driver around an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns the app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: &str) -> bool {
            let Some(action) = InputAction::from_key(key) else {
                return false;
            };
            // Prefer clicking the matching keypad button so highlighting is
            // exercised too; keys without a button go straight to the app.
            match self.app.keypad().find_by_action(action) {
                Some(index) => self.app.click_button(index),
                None => self.app.apply(action),
            }
            true
        }

        fn display(&self) -> DisplayPair {
            self.app.display()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behaviour checks =====

/// Digits group in the integer part only
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["1", "2", "3", "4"]);
    assert_eq!(driver.display().current, "1,234");

    driver.press_all(&[".", "5", "6", "7", "8"]);
    assert_eq!(driver.display().current, "1,234.5678");
    driver.clear();
}

/// A second decimal point is ignored
pub fn verify_duplicate_point<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["5", ".", "."]);
    assert_eq!(driver.display().current, "5.");
    driver.clear();
}

/// Chained operators fold left to right
pub fn verify_chained_folding<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["5", "+", "3", "+"]);
    assert_eq!(driver.display().previous, "8 +");
    driver.press_all(&["2", "="]);
    assert_eq!(driver.display().current, "10");
    assert_eq!(driver.display().previous, "");
    driver.clear();
}

/// Incomplete input never changes the display
pub fn verify_noop_inputs<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["+", "="]);
    assert_eq!(driver.display(), DisplayPair::default());

    driver.press("Backspace");
    assert_eq!(driver.display(), DisplayPair::default());
    driver.clear();
}

/// Division by zero renders instead of failing
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_all(&["4", "÷", "0", "="]);
    assert_eq!(driver.display().current, "∞");
    driver.clear();
}

/// Clear always returns to the empty display
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    driver.press_all(&["9", "*", "9"]);
    driver.clear();
    assert_eq!(driver.display(), DisplayPair::default());
}

/// Runs every check
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_duplicate_point(driver);
    verify_chained_folding(driver);
    verify_noop_inputs(driver);
    verify_division_by_zero(driver);
    verify_clear(driver);
}
