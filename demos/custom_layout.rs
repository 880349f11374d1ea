//! Custom Layout
//!
//! This example loads a relabelled keypad from JSON and shows how layout
//! validation reports every problem at once.
//!
//! Run with: cargo run --example custom_layout

use pocketcalc::builder::{BuildError, CalculatorBuilder};
use pocketcalc::keypad::{ButtonSpec, Key, KeypadLayout, LayoutError};
use pocketcalc::Operator;

fn main() {
    println!("=== Custom Layout Example ===\n");

    // Swap the ASCII operator labels for typographic ones
    let mut layout = KeypadLayout::standard();
    for button in &mut layout.buttons {
        let relabel = match button.key() {
            Ok(Key::Operator(Operator::Multiply)) => Some("×"),
            Ok(Key::Operator(Operator::Divide)) => Some("÷"),
            Ok(Key::Operator(Operator::Subtract)) => Some("−"),
            _ => None,
        };
        if let (Some(label), Ok(key)) = (relabel, button.key()) {
            *button = ButtonSpec::new(key).labelled(label);
        }
    }
    let json = layout.to_json().expect("layout serializes");

    let mut calc = CalculatorBuilder::new()
        .layout_json(&json)
        .and_then(|b| b.display(|text: &str| println!("  display: {text}")).build())
        .expect("relabelled layout is valid");

    for label in ["9", "÷", "4", "×", "2", "="] {
        calc.press_label(label).expect("label is on the keypad");
    }
    println!();

    // A keypad with no equals key and an oversized button
    let mut broken = KeypadLayout::standard();
    broken.columns = 2;
    broken.buttons.retain(|b| b.label != "=");

    match CalculatorBuilder::new().layout(broken).build() {
        Err(BuildError::Layout(LayoutError::Invalid(violations))) => {
            println!("Broken layout rejected with {} problems:", violations.len());
            for violation in violations {
                println!("  - {violation}");
            }
        }
        Err(other) => println!("Unexpected error: {other}"),
        Ok(_) => println!("Broken layout was accepted"),
    }

    println!("\n=== Example Complete ===");
}
