//! keycalc - a two-operand keypad calculator
//!
//! The engine is an explicit state machine over four states (empty, first
//! operand, operator pending, second operand). Keypad presses drive it
//! through [`adapter::InputAction`]; invalid presses are absorbed as
//! no-ops, so nothing in the engine returns an error. Display text is
//! produced by a locale-aware formatter that groups the integer part and
//! leaves the fractional part as typed.
//!
//! Front ends plug in at two seams:
//!
//! - [`display::DisplayRenderer`] receives the formatted display after
//!   every action ([`display::Session`] wires it to an engine)
//! - the `tui` feature adds a ratatui/crossterm terminal app
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut session = Session::new(MemoryDisplay::new());
//! for key in ["1", "2", "3", "4", "+", "6", "="] {
//!     session.press_key(key);
//! }
//! assert_eq!(session.renderer().last().current, "1,240");
//!
//! let mut engine = CalculatorEngine::with_format(FormatConfig::new(NumberLocale::De));
//! for c in "1234.5".chars() {
//!     engine.append(c);
//! }
//! engine.choose_operator(Operator::Multiply);
//! assert_eq!(engine.display().previous, "1.234,5 *");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod adapter;
pub mod core;
pub mod display;
pub mod driver;
pub mod keypad;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::adapter::{InputAction, KEY_BINDINGS};
    pub use crate::core::{
        format_for_display, CalcState, CalculatorEngine, DisplayPair, FormatConfig,
        NumberLocale, Operand, Operator, StateTag,
    };
    pub use crate::display::{DisplayRenderer, MemoryDisplay, Session};
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
