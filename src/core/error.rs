//! Error types for the calculator core.

use thiserror::Error;

use super::operator::Operator;

/// Failure to evaluate the pending operation.
///
/// Never surfaced past `CalculatorState::set_operation`, which keeps the
/// first operand unchanged when evaluation fails.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EvaluationError {
    #[error("'{0}' is not a binary operator")]
    NotBinary(Operator),

    #[error("No operation is pending")]
    NothingPending,
}

/// Errors turning characters or button labels into keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("Unknown key character '{0}'")]
    UnknownCharacter(char),

    #[error("No button labelled '{0}'")]
    UnknownLabel(String),

    #[error("Digit {0} is out of range 0-9")]
    DigitOutOfRange(u8),
}
