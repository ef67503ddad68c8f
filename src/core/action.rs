//! # Actions
//!
//! Everything a user can do to the calculator becomes an `Action`.
//! Presses `7`? That's `Action::InputDigit(7)`.
//! Clicks `±`? That's `Action::Negate`.
//!
//! The `update()` function takes the calculator and an action, applies it,
//! and returns what the display should show. Adapters never poke the
//! engine any other way.
//!
//! ```text
//! Calculator + Action  →  update()  →  DisplaySnapshot
//! ```
//!
//! This makes everything testable: feed actions, compare snapshots.
//! And debuggable: log every action, replay the exact session.

use log::debug;
use serde::Serialize;

use super::operator::Operator;
use super::state::{Calculator, DisplaySnapshot};

/// A single decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    InputDigit(Digit),
    InputDecimal,
    InputOperator(Operator),
    /// Equals.
    Calculate,
    /// Backspace.
    Delete,
    ClearAll,
    InputPercent,
    Negate,
}

impl Action {
    /// Short keypad-style label: `7`, `÷`, `=`, `±`.
    pub fn label(self) -> String {
        match self {
            Action::InputDigit(digit) => digit.as_char().to_string(),
            Action::InputDecimal => ".".to_string(),
            Action::InputOperator(op) => op.symbol().to_string(),
            Action::Calculate => "=".to_string(),
            Action::Delete => "⌫".to_string(),
            Action::ClearAll => "C".to_string(),
            Action::InputPercent => "%".to_string(),
            Action::Negate => "±".to_string(),
        }
    }
}

/// Apply one action to the calculator.
pub fn update(calculator: &mut Calculator, action: Action) -> DisplaySnapshot {
    debug!("Action: {:?}", action);
    match action {
        Action::InputDigit(digit) => calculator.input_digit(digit),
        Action::InputDecimal => calculator.input_decimal(),
        Action::InputOperator(op) => calculator.input_operator(op),
        Action::Calculate => calculator.calculate(),
        Action::Delete => calculator.delete(),
        Action::ClearAll => calculator.clear_all(),
        Action::InputPercent => calculator.input_percent(),
        Action::Negate => calculator.negate(),
    }
}

/// Apply actions in order, collecting the display after each one.
pub fn replay(calculator: &mut Calculator, actions: &[Action]) -> Vec<DisplaySnapshot> {
    actions
        .iter()
        .map(|&action| update(calculator, action))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
    }

    #[test]
    fn test_digit_from_char() {
        for c in '0'..='9' {
            let digit = Digit::from_char(c).unwrap();
            assert_eq!(digit.as_char(), c);
        }
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char('.'), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Action::InputDigit(Digit::new(7).unwrap()).label(), "7");
        assert_eq!(Action::InputOperator(Operator::Divide).label(), "÷");
        assert_eq!(Action::Calculate.label(), "=");
        assert_eq!(Action::Negate.label(), "±");
        assert_eq!(Action::Delete.label(), "⌫");
    }

    #[test]
    fn test_update_dispatches() {
        let mut calc = Calculator::new();
        let display = update(&mut calc, Action::InputDigit(Digit::new(8).unwrap()));
        assert_eq!(display.current, "8");

        let display = update(&mut calc, Action::InputOperator(Operator::Divide));
        assert_eq!(display.previous, "8 ÷");

        update(&mut calc, Action::InputDigit(Digit::new(2).unwrap()));
        let display = update(&mut calc, Action::Calculate);
        assert_eq!(display.current, "4");
        assert_eq!(display.previous, "");
    }

    #[test]
    fn test_update_returns_fresh_snapshot() {
        let mut calc = Calculator::new();
        update(&mut calc, Action::InputDigit(Digit::new(5).unwrap()));
        let display = update(&mut calc, Action::Negate);
        assert_eq!(display, calc.snapshot());
        assert_eq!(display.current, "-5");
    }

    #[test]
    fn test_replay_collects_every_step() {
        let mut calc = Calculator::new();
        let actions = [
            Action::InputDigit(Digit::new(1).unwrap()),
            Action::InputOperator(Operator::Add),
            Action::InputDigit(Digit::new(2).unwrap()),
            Action::Calculate,
        ];
        let steps = replay(&mut calc, &actions);
        let currents: Vec<&str> = steps.iter().map(|s| s.current.as_str()).collect();
        assert_eq!(currents, ["1", "1", "2", "3"]);
        assert_eq!(steps[1].previous, "1 +");
    }

    #[test]
    fn test_action_serializes_tagged() {
        let json = serde_json::to_string(&Action::InputOperator(Operator::Multiply)).unwrap();
        assert_eq!(json, r#"{"action":"input_operator","value":"multiply"}"#);
        let json = serde_json::to_string(&Action::Calculate).unwrap();
        assert_eq!(json, r#"{"action":"calculate"}"#);
    }
}
