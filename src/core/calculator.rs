//! The calculator state value and its pure transitions.
//!
//! Every transition borrows the current state and returns the next one.
//! The owner (see [`crate::session::Calculator`]) decides what to do with it.

use serde::{Deserialize, Serialize};

use super::error::EvaluationError;
use super::input::Input;
use super::number::{format_number, parse_number};
use super::operator::Operator;
use super::phase::Phase;

/// Complete state of a four-function calculator.
///
/// # Example
///
/// ```rust
/// use pocketcalc::core::{CalculatorState, Input, Operator};
///
/// let state = CalculatorState::new()
///     .add_digit(Input::digit(3).unwrap())
///     .set_operation(Operator::Add)
///     .add_digit(Input::digit(4).unwrap())
///     .set_operation(Operator::Equals);
///
/// assert_eq!(state.display_value(), "7");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    display_value: String,
    clear_display: bool,
    operation: Option<Operator>,
    values: [f64; 2],
    current: Phase,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// The state shown when the calculator starts or is cleared.
    pub fn new() -> Self {
        Self {
            display_value: "0".to_string(),
            clear_display: false,
            operation: None,
            values: [0.0, 0.0],
            current: Phase::EnteringFirstOperand,
        }
    }

    pub fn display_value(&self) -> &str {
        &self.display_value
    }

    /// Whether the next digit replaces the display instead of appending.
    pub fn clear_display(&self) -> bool {
        self.clear_display
    }

    /// The pending operation, if any.
    pub fn operation(&self) -> Option<Operator> {
        self.operation
    }

    pub fn values(&self) -> [f64; 2] {
        self.values
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    /// Append a digit or the decimal point to the display.
    ///
    /// The display starts over when it shows a lone `0` or when the
    /// clear-display flag is set. A second point in the same entry is
    /// ignored. Digits (not the point) refresh the operand being entered.
    pub fn add_digit(&self, input: Input) -> Self {
        let start_over = self.display_value == "0" || self.clear_display;

        if input.is_point() && !start_over && self.display_value.contains(Input::POINT) {
            return self.clone();
        }

        let mut display_value = if start_over {
            String::new()
        } else {
            self.display_value.clone()
        };
        display_value.push(input.as_char());

        let mut values = self.values;
        if !input.is_point() {
            values[self.current.index()] = parse_number(&display_value);
        }

        Self {
            display_value,
            clear_display: false,
            values,
            ..self.clone()
        }
    }

    /// Choose an operator, resolving the pending one first if there is one.
    ///
    /// While the first operand is being entered the operator is only
    /// recorded, equals included. Once in the second phase the pending
    /// operation is evaluated left to right; a failed evaluation keeps the
    /// first operand as it was. Equals then returns to the first phase,
    /// any other operator stays pending for a chained calculation.
    pub fn set_operation(&self, op: Operator) -> Self {
        match self.current {
            Phase::EnteringFirstOperand => Self {
                operation: Some(op),
                current: Phase::EnteringSecondOperand,
                clear_display: true,
                ..self.clone()
            },
            Phase::EnteringSecondOperand => {
                let result = self.evaluate().unwrap_or(self.values[0]);

                let (operation, current) = if op.is_equals() {
                    (None, Phase::EnteringFirstOperand)
                } else {
                    (Some(op), Phase::EnteringSecondOperand)
                };

                Self {
                    display_value: format_number(result),
                    clear_display: true,
                    operation,
                    values: [result, 0.0],
                    current,
                }
            }
        }
    }

    /// Reset everything to the initial state.
    pub fn clear_memory(&self) -> Self {
        Self::new()
    }

    /// Apply the pending operation to both operands.
    pub fn evaluate(&self) -> Result<f64, EvaluationError> {
        let op = self.operation.ok_or(EvaluationError::NothingPending)?;
        op.apply(self.values[0], self.values[1])
    }
}
