//! Calculator session: the owner of the current state.

use chrono::Utc;
use stillwater::validation::Validation;

use super::display::Display;
use super::error::SessionError;
use crate::core::{CalculatorState, Phase, State, StateHistory, StateTransition};
use crate::keypad::{parse_keys, Key, KeypadLayout};

/// Callback run with the new state after every key press.
pub type Subscriber = Box<dyn FnMut(&CalculatorState) + Send>;

/// A running calculator, as held by the UI root for its whole lifetime.
///
/// Each press applies exactly one pure transition, records a phase change
/// when there is one, then hands the new state to every subscriber in the
/// order they subscribed.
///
/// # Example
///
/// ```rust
/// use pocketcalc::session::{Calculator, TextDisplay};
///
/// let display = TextDisplay::new();
/// let mut calc = Calculator::new();
/// calc.subscribe_display(display.clone());
///
/// calc.press_script("3+4*2=").unwrap();
/// assert_eq!(calc.display_value(), "14");
/// assert_eq!(display.text().as_deref(), Some("14"));
/// ```
pub struct Calculator {
    state: CalculatorState,
    layout: KeypadLayout,
    history: StateHistory<Phase>,
    subscribers: Vec<Subscriber>,
    presses: usize,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// A cleared calculator on the standard keypad.
    pub fn new() -> Self {
        Self::with_parts(CalculatorState::new(), KeypadLayout::standard())
    }

    /// Assemble a session from an already validated layout.
    pub(crate) fn with_parts(state: CalculatorState, layout: KeypadLayout) -> Self {
        Self {
            state,
            layout,
            history: StateHistory::new(),
            subscribers: Vec::new(),
            presses: 0,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn display_value(&self) -> &str {
        self.state.display_value()
    }

    pub fn layout(&self) -> &KeypadLayout {
        &self.layout
    }

    /// Phase changes recorded so far.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// Number of keys pressed since the session started.
    pub fn presses(&self) -> usize {
        self.presses
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&CalculatorState) + Send + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Show the current text on `display` now and after every press.
    pub fn subscribe_display<D>(&mut self, mut display: D)
    where
        D: Display + Send + 'static,
    {
        display.render(self.state.display_value());
        self.subscribe(move |state: &CalculatorState| display.render(state.display_value()));
    }

    /// Apply one key press.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        self.presses += 1;

        let next = match key {
            Key::Input(input) => self.state.add_digit(input),
            Key::Operator(op) => self.state.set_operation(op),
            Key::Clear => self.state.clear_memory(),
        };
        tracing::trace!(
            press = self.presses,
            key = %key,
            display = next.display_value(),
            "key pressed"
        );

        let (from, to) = (self.state.current(), next.current());
        if from != to {
            tracing::debug!(from = from.name(), to = to.name(), "phase changed");
            self.history = std::mem::take(&mut self.history).record(StateTransition {
                from,
                to,
                timestamp: Utc::now(),
                press: self.presses,
            });
        }

        self.state = next;
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
        &self.state
    }

    /// Press the button carrying `label` on this session's keypad.
    pub fn press_label(&mut self, label: &str) -> Result<&CalculatorState, SessionError> {
        let key = self.layout.resolve(label)?;
        Ok(self.press(key))
    }

    /// Press keys in order.
    pub fn press_all<I>(&mut self, keys: I) -> &CalculatorState
    where
        I: IntoIterator<Item = Key>,
    {
        for key in keys {
            self.press(key);
        }
        &self.state
    }

    /// Press every key of a script. Nothing is pressed if any character
    /// is invalid.
    pub fn press_script(&mut self, script: &str) -> Result<&CalculatorState, SessionError> {
        match parse_keys(script) {
            Validation::Success(keys) => Ok(self.press_all(keys)),
            Validation::Failure(errors) => {
                tracing::debug!(errors = errors.len(), "rejected key script");
                Err(SessionError::Script(errors.iter().cloned().collect()))
            }
        }
    }

    /// The all-clear button.
    pub fn clear_memory(&mut self) -> &CalculatorState {
        self.press(Key::Clear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Input, KeyError, Operator};
    use crate::session::TextDisplay;
    use std::sync::{Arc, Mutex};

    #[test]
    fn starts_cleared() {
        let calc = Calculator::new();
        assert_eq!(calc.state(), &CalculatorState::new());
        assert_eq!(calc.presses(), 0);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn labels_drive_the_state_machine() {
        let mut calc = Calculator::new();
        for label in ["1", "2", ".", "5", "*", "2", "="] {
            calc.press_label(label).unwrap();
        }
        assert_eq!(calc.display_value(), "25");
        assert_eq!(calc.presses(), 7);
    }

    #[test]
    fn unknown_label_presses_nothing() {
        let mut calc = Calculator::new();
        let err = calc.press_label("%").unwrap_err();
        assert_eq!(err, SessionError::Key(KeyError::UnknownLabel("%".into())));
        assert_eq!(calc.presses(), 0);
    }

    #[test]
    fn invalid_script_is_rejected_whole() {
        let mut calc = Calculator::new();
        let err = calc.press_script("1+x2=").unwrap_err();
        match err {
            SessionError::Script(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].position, 2);
            }
            other => panic!("Expected script error, got {other:?}"),
        }
        assert_eq!(calc.state(), &CalculatorState::new());
    }

    #[test]
    fn display_sees_initial_and_every_press() {
        let display = TextDisplay::new();
        let mut calc = Calculator::new();
        calc.subscribe_display(display.clone());

        calc.press_script("5/0=").unwrap();
        assert_eq!(display.frames(), vec!["0", "5", "5", "0", "Infinity"]);
    }

    #[test]
    fn subscribers_run_once_per_press_in_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut calc = Calculator::new();

        let first = Arc::clone(&log);
        calc.subscribe(move |s: &CalculatorState| {
            first.lock().unwrap().push(format!("a:{}", s.display_value()))
        });
        let second = Arc::clone(&log);
        calc.subscribe(move |s: &CalculatorState| {
            second.lock().unwrap().push(format!("b:{}", s.display_value()))
        });

        calc.press(Key::Input(Input::digit(8).unwrap()));
        calc.press(Key::Clear);

        assert_eq!(*log.lock().unwrap(), vec!["a:8", "b:8", "a:0", "b:0"]);
    }

    #[test]
    fn history_records_phase_changes_only() {
        let mut calc = Calculator::new();
        calc.press_script("12+3=4").unwrap();

        let history = calc.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].press, 3);
        assert_eq!(history.transitions()[1].press, 5);
        assert_eq!(
            history.get_path(),
            vec![
                &Phase::EnteringFirstOperand,
                &Phase::EnteringSecondOperand,
                &Phase::EnteringFirstOperand,
            ]
        );
    }

    #[test]
    fn chained_operators_stay_in_second_phase() {
        let mut calc = Calculator::new();
        calc.press_script("2+3-1*").unwrap();
        assert_eq!(calc.display_value(), "4");
        assert_eq!(calc.state().operation(), Some(Operator::Multiply));
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn clear_memory_resets_mid_calculation() {
        let mut calc = Calculator::new();
        calc.press_script("9*9").unwrap();
        calc.clear_memory();
        assert_eq!(calc.state(), &CalculatorState::new());
        assert_eq!(calc.history().count_into(&Phase::EnteringFirstOperand), 1);
    }

    #[test]
    fn session_can_move_to_another_thread() {
        let mut calc = Calculator::new();
        calc.subscribe(|_: &CalculatorState| {});

        let handle = std::thread::spawn(move || {
            calc.press_script("6*7=").unwrap();
            calc.display_value().to_string()
        });
        assert_eq!(handle.join().unwrap(), "42");
    }
}
