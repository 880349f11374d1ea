//! Pocketcalc: a four-function calculator as a pure functional state machine
//!
//! The calculator core is a plain value with pure transitions: pressing a key
//! never mutates state in place, it returns the next state. A thin session
//! shell owns the current value and pushes each new one to the display.
//!
//! # Core Concepts
//!
//! - **CalculatorState**: display text, pending operator and the two operands
//! - **Phase**: which operand digit entry is writing to
//! - **Keypad**: the button grid and the key each button triggers
//! - **Session**: the owner of the current state and its subscribers
//!
//! Evaluation is strictly left to right with no operator precedence:
//! `3 + 4 * 2 =` shows `14`.
//!
//! # Example
//!
//! ```rust
//! use pocketcalc::core::{CalculatorState, Input, Operator, Phase};
//!
//! let state = CalculatorState::new()
//!     .add_digit(Input::digit(3).unwrap())
//!     .set_operation(Operator::Add)
//!     .add_digit(Input::digit(4).unwrap())
//!     .set_operation(Operator::Multiply)
//!     .add_digit(Input::digit(2).unwrap())
//!     .set_operation(Operator::Equals);
//!
//! assert_eq!(state.display_value(), "14");
//! assert_eq!(state.operation(), None);
//! assert_eq!(state.current(), Phase::EnteringFirstOperand);
//! ```

pub mod builder;
pub mod core;
pub mod keypad;
pub mod session;

// Re-export commonly used types
pub use builder::CalculatorBuilder;
pub use crate::core::{CalculatorState, Input, Operator, Phase, State};
pub use keypad::{Key, KeypadLayout};
pub use session::{Calculator, Display, TextDisplay};
