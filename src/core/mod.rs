//! Calculator core: state, phases and pure transitions.
//!
//! Nothing in this module performs I/O or mutates shared state:
//! - `CalculatorState` transitions return a new value
//! - `Operator::apply` is a direct arithmetic dispatch
//! - `StateHistory::record` returns a new history

mod calculator;
mod error;
mod history;
mod input;
mod number;
mod operator;
mod phase;
mod state;

pub use calculator::CalculatorState;
pub use error::{EvaluationError, KeyError};
pub use history::{StateHistory, StateTransition};
pub use input::{Digit, Input};
pub use number::{format_number, parse_number};
pub use operator::Operator;
pub use phase::Phase;
pub use state::State;
