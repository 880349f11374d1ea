//! Property-based tests for the calculator state machine.
//!
//! These tests use proptest to drive the pure transitions and the session
//! with random key sequences.

use pocketcalc::core::{format_number, parse_number, CalculatorState, Input, Operator, Phase};
use pocketcalc::keypad::{parse_keys, to_script, Key};
use pocketcalc::session::Calculator;
use proptest::prelude::*;
use stillwater::validation::Validation;

prop_compose! {
    fn arbitrary_input()(variant in 0..11u8) -> Input {
        match variant {
            10 => Input::Point,
            n => Input::digit(n).unwrap(),
        }
    }
}

prop_compose! {
    fn arbitrary_operator()(variant in 0..5usize) -> Operator {
        Operator::ALL[variant]
    }
}

fn arbitrary_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        6 => arbitrary_input().prop_map(Key::Input),
        3 => arbitrary_operator().prop_map(Key::Operator),
        1 => Just(Key::Clear),
    ]
}

fn apply(state: &CalculatorState, key: Key) -> CalculatorState {
    match key {
        Key::Input(input) => state.add_digit(input),
        Key::Operator(op) => state.set_operation(op),
        Key::Clear => state.clear_memory(),
    }
}

proptest! {
    #[test]
    fn clear_memory_always_restores_initial(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let state = keys.iter().fold(CalculatorState::new(), |s, k| apply(&s, *k));
        prop_assert_eq!(state.clear_memory(), CalculatorState::new());
    }

    #[test]
    fn digit_entry_never_shows_two_points(inputs in prop::collection::vec(arbitrary_input(), 1..20)) {
        let state = inputs
            .iter()
            .fold(CalculatorState::new(), |s, i| s.add_digit(*i));
        prop_assert!(state.display_value().matches('.').count() <= 1);
    }

    #[test]
    fn digit_press_mirrors_display_into_operand(
        keys in prop::collection::vec(arbitrary_key(), 0..30),
        n in 0..10u8,
    ) {
        let state = keys.iter().fold(CalculatorState::new(), |s, k| apply(&s, *k));
        let next = state.add_digit(Input::digit(n).unwrap());
        let value = next.values()[next.current().index()];
        let parsed = parse_number(next.display_value());
        prop_assert!(value == parsed || (value.is_nan() && parsed.is_nan()));
        prop_assert!(!next.clear_display());
    }

    #[test]
    fn first_phase_has_no_pending_operation(
        keys in prop::collection::vec(arbitrary_key(), 0..40)
    ) {
        let state = keys.iter().fold(CalculatorState::new(), |s, k| apply(&s, *k));
        if state.current() == Phase::EnteringFirstOperand {
            prop_assert_eq!(state.operation(), None);
        } else {
            prop_assert!(state.operation().is_some());
        }
    }

    #[test]
    fn operator_always_requests_fresh_entry(
        keys in prop::collection::vec(arbitrary_key(), 0..30),
        op in arbitrary_operator(),
    ) {
        let state = keys.iter().fold(CalculatorState::new(), |s, k| apply(&s, *k));
        let next = state.set_operation(op);
        prop_assert!(next.clear_display());
        prop_assert_eq!(next.values()[1], if state.current() == Phase::EnteringFirstOperand {
            state.values()[1]
        } else {
            0.0
        });
    }

    #[test]
    fn binary_result_is_shown_after_equals(a in 0..1000u32, b in 1..1000u32, op in 0..4usize) {
        let op = Operator::ALL[op];
        let mut calc = Calculator::new();
        calc.press_script(&format!("{a}{op}{b}=")).unwrap();

        let expected = op.apply(a as f64, b as f64).unwrap();
        prop_assert_eq!(calc.display_value(), format_number(expected));
        prop_assert_eq!(calc.state().current(), Phase::EnteringFirstOperand);
    }

    #[test]
    fn session_matches_pure_fold(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        let mut calc = Calculator::new();
        calc.press_all(keys.iter().copied());

        let expected = keys.iter().fold(CalculatorState::new(), |s, k| apply(&s, *k));
        prop_assert_eq!(calc.display_value(), expected.display_value());
        prop_assert_eq!(calc.state().current(), expected.current());
        prop_assert_eq!(calc.presses(), keys.len());
    }

    #[test]
    fn scripts_round_trip(keys in prop::collection::vec(arbitrary_key(), 0..40)) {
        match parse_keys(&to_script(&keys)) {
            Validation::Success(parsed) => prop_assert_eq!(parsed, keys),
            Validation::Failure(_) => prop_assert!(false, "script failed to parse"),
        }
    }
}
