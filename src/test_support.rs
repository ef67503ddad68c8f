//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, Digit, update};
use crate::core::script;
use crate::core::state::Calculator;

/// Shorthand for a digit known to be valid.
pub fn digit(n: u8) -> Digit {
    Digit::new(n).expect("digit out of range")
}

/// Parses a key script, panicking on malformed input.
pub fn actions(keys: &str) -> Vec<Action> {
    script::parse(keys).expect("test script should parse")
}

/// Runs a key script against an existing calculator.
pub fn apply_script(calculator: &mut Calculator, keys: &str) {
    for action in actions(keys) {
        update(calculator, action);
    }
}

/// A fresh calculator after running a key script.
pub fn calculator_after(keys: &str) -> Calculator {
    let mut calculator = Calculator::new();
    apply_script(&mut calculator, keys);
    calculator
}
