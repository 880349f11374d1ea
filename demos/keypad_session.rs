//! Keypad Session
//!
//! This example drives a calculator session the way a UI would: each button
//! label is pressed in turn and a display subscriber redraws the screen.
//!
//! Key concepts:
//! - The session owns the state; transitions are pure
//! - Displays subscribe and are redrawn after every press
//! - Chained operators evaluate strictly left to right
//!
//! Run with: cargo run --example keypad_session
//! Trace key presses with: RUST_LOG=pocketcalc=trace cargo run --example keypad_session

use pocketcalc::keypad::KeypadLayout;
use pocketcalc::session::{Calculator, TextDisplay};
use tracing_subscriber::EnvFilter;

fn draw_keypad(layout: &KeypadLayout) {
    for row in layout.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|button| {
                let width = button.width.span() * 5 - 2;
                format!("[{:^width$}]", button.label)
            })
            .collect();
        println!("  {}", cells.join(""));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session Example ===\n");

    let display = TextDisplay::new();
    let mut calc = Calculator::new();
    calc.subscribe_display(display.clone());

    draw_keypad(calc.layout());
    println!();

    let presses = ["3", "+", "4", "*", "2", "=", "AC", "5", "/", "0", "="];
    for label in presses {
        match calc.press_label(label) {
            Ok(state) => println!(
                "  press {label:>2} -> display {:>10}  ({})",
                state.display_value(),
                state.current().index()
            ),
            Err(err) => println!("  press {label:>2} -> rejected: {err}"),
        }
    }

    println!("\nFrames rendered: {}", display.frames().len());
    println!("Phase changes:   {}", calc.history().len());

    println!("\n=== Example Complete ===");
}
