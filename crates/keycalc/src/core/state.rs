//! Explicit calculator state
//!
//! Each variant carries exactly the fields that exist in that state, so a
//! pending operator without a previous operand cannot be represented.

use super::operand::Operand;
use super::operator::Operator;

/// Calculator state machine
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CalcState {
    /// Nothing entered
    #[default]
    Empty,
    /// Entering the first operand, no operator chosen
    FirstOperandEntry {
        /// Operand being entered (or the last result)
        current: Operand,
    },
    /// Operator chosen, waiting for the second operand
    OperatorPending {
        /// Operand captured before the operator
        previous: Operand,
        /// Operator awaiting its right-hand side
        operator: Operator,
    },
    /// Entering the second operand
    SecondOperandEntry {
        /// Operand captured before the operator
        previous: Operand,
        /// Operator awaiting application
        operator: Operator,
        /// Right-hand operand being entered
        current: Operand,
    },
}

/// Field-less view of [`CalcState`], used for logging and assertions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateTag {
    /// See [`CalcState::Empty`]
    Empty,
    /// See [`CalcState::FirstOperandEntry`]
    FirstOperandEntry,
    /// See [`CalcState::OperatorPending`]
    OperatorPending,
    /// See [`CalcState::SecondOperandEntry`]
    SecondOperandEntry,
}

impl CalcState {
    /// Returns the variant tag
    #[must_use]
    pub const fn tag(&self) -> StateTag {
        match self {
            Self::Empty => StateTag::Empty,
            Self::FirstOperandEntry { .. } => StateTag::FirstOperandEntry,
            Self::OperatorPending { .. } => StateTag::OperatorPending,
            Self::SecondOperandEntry { .. } => StateTag::SecondOperandEntry,
        }
    }

    /// Returns the operand currently being entered
    #[must_use]
    pub const fn current(&self) -> Option<&Operand> {
        match self {
            Self::FirstOperandEntry { current } | Self::SecondOperandEntry { current, .. } => {
                Some(current)
            }
            Self::Empty | Self::OperatorPending { .. } => None,
        }
    }

    /// Returns the operand captured before the pending operator
    #[must_use]
    pub const fn previous(&self) -> Option<&Operand> {
        match self {
            Self::OperatorPending { previous, .. } | Self::SecondOperandEntry { previous, .. } => {
                Some(previous)
            }
            Self::Empty | Self::FirstOperandEntry { .. } => None,
        }
    }

    /// Returns the pending operator
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::OperatorPending { operator, .. } | Self::SecondOperandEntry { operator, .. } => {
                Some(*operator)
            }
            Self::Empty | Self::FirstOperandEntry { .. } => None,
        }
    }
}

impl std::fmt::Display for StateTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::FirstOperandEntry => "first-operand",
            Self::OperatorPending => "operator-pending",
            Self::SecondOperandEntry => "second-operand",
        };
        f.write_str(name)
    }
}
