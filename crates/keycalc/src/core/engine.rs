//! Calculator engine
//!
//! Owns the [`CalcState`] and exposes the five state transitions plus a
//! read-only display accessor. Invalid input is absorbed as a no-op; no
//! operation returns an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::format::{format_operand, FormatConfig};
use super::operand::Operand;
use super::operator::Operator;
use super::state::{CalcState, StateTag};

/// Formatted display lines
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayPair {
    /// Current operand, formatted
    pub current: String,
    /// Previous operand and pending operator (`"1,234 +"`), or empty
    pub previous: String,
}

/// Two-operand keypad calculator
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalcState,
    format: FormatConfig,
}

impl CalculatorEngine {
    /// Creates an engine in the empty state with the default locale
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with an explicit formatting configuration
    #[must_use]
    pub fn with_format(format: FormatConfig) -> Self {
        Self {
            state: CalcState::Empty,
            format,
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Returns the state tag
    #[must_use]
    pub fn tag(&self) -> StateTag {
        self.state.tag()
    }

    /// Returns the formatting configuration
    #[must_use]
    pub fn format_config(&self) -> &FormatConfig {
        &self.format
    }

    /// Replaces the formatting configuration; state is untouched
    pub fn set_format_config(&mut self, format: FormatConfig) {
        self.format = format;
    }

    /// Current operand as text, empty when none is being entered
    #[must_use]
    pub fn current_operand(&self) -> String {
        self.state.current().map(Operand::text).unwrap_or_default()
    }

    /// Numeric value of the current operand, if it parses
    #[must_use]
    pub fn current_value(&self) -> Option<f64> {
        self.state.current().and_then(Operand::value)
    }

    /// Previous operand as text, empty when no operator is pending
    #[must_use]
    pub fn previous_operand(&self) -> String {
        self.state.previous().map(Operand::text).unwrap_or_default()
    }

    /// Pending operator, if any
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.operator()
    }

    /// Appends a digit or decimal point to the current operand.
    ///
    /// A second decimal point and any non-entry character are ignored.
    pub fn append(&mut self, token: char) {
        if !Operand::is_entry_token(token) {
            trace!(?token, "ignored non-entry token");
            return;
        }

        self.state = match std::mem::take(&mut self.state) {
            CalcState::Empty => CalcState::FirstOperandEntry {
                current: Operand::start(token),
            },
            CalcState::FirstOperandEntry { current } => CalcState::FirstOperandEntry {
                current: current.pushed(token),
            },
            CalcState::OperatorPending { previous, operator } => CalcState::SecondOperandEntry {
                previous,
                operator,
                current: Operand::start(token),
            },
            CalcState::SecondOperandEntry {
                previous,
                operator,
                current,
            } => CalcState::SecondOperandEntry {
                previous,
                operator,
                current: current.pushed(token),
            },
        };
        trace!(?token, state = %self.tag(), "append");
    }

    /// Records `op` as the pending operator.
    ///
    /// Does nothing without a current operand. When an operator is already
    /// pending, the prior operation is folded first so chained entry
    /// evaluates left to right.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.state.current().is_none() {
            trace!(%op, "operator ignored: no current operand");
            return;
        }
        if self.state.previous().is_some() {
            self.compute();
        }

        self.state = match std::mem::take(&mut self.state) {
            CalcState::FirstOperandEntry { current }
            | CalcState::SecondOperandEntry { current, .. } => CalcState::OperatorPending {
                previous: current,
                operator: op,
            },
            other => other,
        };
        debug!(%op, state = %self.tag(), "operator chosen");
    }

    /// Applies the pending operator to both operands.
    ///
    /// A no-op when either operand fails to parse or no operator is pending.
    /// The numeric result becomes the current operand.
    pub fn compute(&mut self) {
        let CalcState::SecondOperandEntry {
            previous,
            operator,
            current,
        } = &self.state
        else {
            trace!(state = %self.tag(), "compute ignored: incomplete operation");
            return;
        };

        let (Some(lhs), Some(rhs)) = (previous.value(), current.value()) else {
            trace!("compute ignored: operand is not numeric");
            return;
        };

        let result = operator.apply(lhs, rhs);
        debug!(lhs, %operator, rhs, result, "computed");
        self.state = CalcState::FirstOperandEntry {
            current: Operand::Computed(result),
        };
    }

    /// Removes the last character of the current operand
    pub fn delete_last(&mut self) {
        self.state = match std::mem::take(&mut self.state) {
            CalcState::FirstOperandEntry { current } => match current.popped() {
                Some(current) => CalcState::FirstOperandEntry { current },
                None => CalcState::Empty,
            },
            CalcState::SecondOperandEntry {
                previous,
                operator,
                current,
            } => match current.popped() {
                Some(current) => CalcState::SecondOperandEntry {
                    previous,
                    operator,
                    current,
                },
                None => CalcState::OperatorPending { previous, operator },
            },
            other => other,
        };
        trace!(state = %self.tag(), "delete");
    }

    /// Resets to the empty state
    pub fn clear(&mut self) {
        self.state = CalcState::Empty;
        debug!("cleared");
    }

    /// Returns the formatted `(current, previous)` display lines
    #[must_use]
    pub fn display(&self) -> DisplayPair {
        let current = self
            .state
            .current()
            .map(|op| format_operand(op, &self.format))
            .unwrap_or_default();

        let previous = match (self.state.previous(), self.state.operator()) {
            (Some(prev), Some(op)) => {
                format!("{} {}", format_operand(prev, &self.format), op.symbol())
            }
            _ => String::new(),
        };

        DisplayPair { current, previous }
    }
}
