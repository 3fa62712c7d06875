//! Calculator core: operands, operators, the state machine and display
//! formatting. Nothing in here performs I/O.

mod engine;
mod format;
mod operand;
mod operator;
mod state;

pub use engine::{CalculatorEngine, DisplayPair};
pub use format::{
    format_for_display, format_operand, FormatConfig, NumberLocale, ParseLocaleError,
    INFINITY_TOKEN, NAN_TOKEN, NEG_INFINITY_TOKEN,
};
pub use operand::{Operand, POINT};
pub use operator::Operator;
pub use state::{CalcState, StateTag};
