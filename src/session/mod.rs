//! The imperative shell around the pure calculator core.
//!
//! A [`Calculator`] owns the one `CalculatorState` of a running calculator,
//! swaps in the value each transition returns and pushes it to subscribers
//! such as a [`Display`].

mod calculator;
mod display;
mod error;

pub use calculator::{Calculator, Subscriber};
pub use display::{Display, TextDisplay};
pub use error::SessionError;
