//! Builder for calculator sessions.

use crate::builder::error::BuildError;
use crate::core::{CalculatorState, Input};
use crate::keypad::{KeypadLayout, LayoutError};
use crate::session::{Calculator, Display, Subscriber};

/// Fluent construction of a [`Calculator`] with a custom keypad, a starting
/// state and subscribers attached before the first press.
///
/// # Example
///
/// ```rust
/// use pocketcalc::builder::CalculatorBuilder;
/// use pocketcalc::session::TextDisplay;
///
/// let display = TextDisplay::new();
/// let mut calc = CalculatorBuilder::new()
///     .display(display.clone())
///     .build()
///     .unwrap();
///
/// calc.press_label("7").unwrap();
/// assert_eq!(display.frames(), vec!["0", "7"]);
/// ```
pub struct CalculatorBuilder {
    initial: Option<CalculatorState>,
    layout: Option<KeypadLayout>,
    subscribers: Vec<Subscriber>,
    displays: Vec<Box<dyn Display + Send>>,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self {
            initial: None,
            layout: None,
            subscribers: Vec::new(),
            displays: Vec::new(),
        }
    }

    /// Start from `state` instead of a cleared calculator.
    pub fn initial(mut self, state: CalculatorState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Use `layout` instead of the standard keypad. Checked in `build`.
    pub fn layout(mut self, layout: KeypadLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Load the keypad from a JSON document.
    pub fn layout_json(mut self, json: &str) -> Result<Self, BuildError> {
        let layout: KeypadLayout = serde_json::from_str(json).map_err(LayoutError::from)?;
        self.layout = Some(layout);
        Ok(self)
    }

    pub fn subscribe<F>(mut self, subscriber: F) -> Self
    where
        F: FnMut(&CalculatorState) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
        self
    }

    pub fn display<D>(mut self, display: D) -> Self
    where
        D: Display + Send + 'static,
    {
        self.displays.push(Box::new(display));
        self
    }

    /// Build the session.
    /// Returns an error listing every layout problem if the keypad is invalid.
    pub fn build(self) -> Result<Calculator, BuildError> {
        let layout = self.layout.unwrap_or_default();
        layout.check()?;

        let initial = self.initial.unwrap_or_default();
        let points = initial
            .display_value()
            .matches(Input::POINT)
            .count();
        if points > 1 {
            return Err(BuildError::MalformedDisplay { found: points });
        }

        let mut calc = Calculator::with_parts(initial, layout);
        for subscriber in self.subscribers {
            calc.subscribe(subscriber);
        }
        for mut display in self.displays {
            display.render(calc.display_value());
            calc.subscribe(move |state: &CalculatorState| display.render(state.display_value()));
        }
        Ok(calc)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crate::keypad::{ButtonSpec, Key, LayoutViolation};
    use crate::session::TextDisplay;
    use std::sync::{Arc, Mutex};

    #[test]
    fn defaults_to_standard_keypad() {
        let calc = CalculatorBuilder::new().build().unwrap();
        assert_eq!(calc.layout(), &KeypadLayout::standard());
        assert_eq!(calc.state(), &CalculatorState::new());
    }

    #[test]
    fn rejects_invalid_layout_with_all_violations() {
        let mut layout = KeypadLayout::standard();
        layout.buttons.retain(|b| b.label != "=" && b.label != "7");

        let result = CalculatorBuilder::new().layout(layout).build();
        match result {
            Err(BuildError::Layout(LayoutError::Invalid(violations))) => {
                assert_eq!(violations.len(), 2);
                assert!(violations.contains(&LayoutViolation::MissingKey("=".into())));
                assert!(violations.contains(&LayoutViolation::MissingKey("7".into())));
            }
            Err(other) => panic!("Expected layout violations, got {other}"),
            Ok(_) => panic!("Expected layout violations, got a calculator"),
        }
    }

    #[test]
    fn layout_json_reports_parse_errors() {
        let result = CalculatorBuilder::new().layout_json("not json");
        assert!(matches!(
            result,
            Err(BuildError::Layout(LayoutError::Parse(_)))
        ));
    }

    #[test]
    fn layout_json_accepts_relabelled_keypad() {
        let mut layout = KeypadLayout::standard();
        for button in &mut layout.buttons {
            if button.label == "*" {
                *button = ButtonSpec::new(Key::Operator(Operator::Multiply)).labelled("×");
            }
        }
        let json = layout.to_json().unwrap();

        let mut calc = CalculatorBuilder::new()
            .layout_json(&json)
            .unwrap()
            .build()
            .unwrap();
        for label in ["6", "×", "7", "="] {
            calc.press_label(label).unwrap();
        }
        assert_eq!(calc.display_value(), "42");
    }

    #[test]
    fn initial_state_is_used() {
        let start = CalculatorState::new().set_operation(Operator::Add);
        let mut calc = CalculatorBuilder::new()
            .initial(start.clone())
            .build()
            .unwrap();
        assert_eq!(calc.state(), &start);

        calc.press_script("5=").unwrap();
        assert_eq!(calc.display_value(), "5");
    }

    #[test]
    fn rejects_display_with_two_points() {
        let json = r#"{
            "display_value": "1.2.3",
            "clear_display": false,
            "operation": null,
            "values": [1.2, 0.0],
            "current": "EnteringFirstOperand"
        }"#;
        let state: CalculatorState = serde_json::from_str(json).unwrap();

        let result = CalculatorBuilder::new().initial(state).build();
        assert!(matches!(
            result,
            Err(BuildError::MalformedDisplay { found: 2 })
        ));
    }

    #[test]
    fn subscribers_are_attached() {
        let seen = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&seen);
        let display = TextDisplay::new();

        let mut calc = CalculatorBuilder::new()
            .subscribe(move |_: &CalculatorState| *counter.lock().unwrap() += 1)
            .display(display.clone())
            .build()
            .unwrap();
        calc.press_script("12").unwrap();

        assert_eq!(*seen.lock().unwrap(), 2);
        assert_eq!(display.frames(), vec!["0", "1", "12"]);
    }
}
