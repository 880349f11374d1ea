//! Which operand digit entry is currently writing to.

use crate::state_enum;

state_enum! {
    /// Entry phase of the calculator.
    ///
    /// `EnteringFirstOperand` corresponds to operand index 0 and means no
    /// operator has been chosen for the expression in progress.
    /// `EnteringSecondOperand` (index 1) means an operator is pending or
    /// was just resolved.
    #[derive(Copy, Eq, Default)]
    pub enum Phase {
        #[default]
        EnteringFirstOperand,
        EnteringSecondOperand,
    }
}

impl Phase {
    /// Index into the operand pair.
    pub fn index(self) -> usize {
        match self {
            Self::EnteringFirstOperand => 0,
            Self::EnteringSecondOperand => 1,
        }
    }
}
