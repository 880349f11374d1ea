//! Builder API for assembling calculator sessions.
//!
//! This module provides a fluent session builder and the `state_enum!`
//! macro used to declare machine phases.

pub mod error;
pub mod macros;
pub mod session;

pub use error::BuildError;
pub use session::CalculatorBuilder;

use crate::core::CalculatorState;
use crate::keypad::KeypadLayout;
use crate::session::Calculator;

/// A cleared calculator on the standard keypad whose display text is
/// passed to `render` now and after every press.
///
/// # Example
///
/// ```
/// use pocketcalc::builder::calculator_with_display;
///
/// let mut calc = calculator_with_display(|text: &str| println!("[{text:>12}]"));
/// calc.press_script("1+1=").unwrap();
/// assert_eq!(calc.display_value(), "2");
/// ```
pub fn calculator_with_display<F>(render: F) -> Calculator
where
    F: FnMut(&str) + Send + 'static,
{
    let mut calc = Calculator::with_parts(CalculatorState::new(), KeypadLayout::standard());
    calc.subscribe_display(render);
    calc
}
