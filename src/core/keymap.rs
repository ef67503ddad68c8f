//! # Key and Button Mapping
//!
//! Translates raw input into `Action`s. Two sources:
//!
//! - **Keys**: what a keyboard sends. The map is fixed; anything not in it
//!   is ignored.
//! - **Buttons**: an `(action, value)` pair naming a keypad button, such as
//!   `("number", "7")` or `("operator", "*")`.
//!
//! | key                  | action          |
//! |----------------------|-----------------|
//! | `0`-`9`              | `InputDigit`    |
//! | `.`                  | `InputDecimal`  |
//! | `+` `-` `*` `/`      | `InputOperator` |
//! | `Enter`, `=`         | `Calculate`     |
//! | `Backspace`          | `Delete`        |
//! | `Escape`             | `ClearAll`      |
//! | `%`                  | `InputPercent`  |
//!
//! Negate has no key. It is only reachable as the `negate` button.

use super::action::{Action, Digit};
use super::operator::Operator;

/// A key press, independent of any terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

pub fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Char(c) => {
            if let Some(digit) = Digit::from_char(c) {
                return Some(Action::InputDigit(digit));
            }
            if let Some(op) = Operator::from_ascii(c) {
                return Some(Action::InputOperator(op));
            }
            match c {
                '.' => Some(Action::InputDecimal),
                '=' => Some(Action::Calculate),
                '%' => Some(Action::InputPercent),
                _ => None,
            }
        }
        Key::Enter => Some(Action::Calculate),
        Key::Backspace => Some(Action::Delete),
        Key::Escape => Some(Action::ClearAll),
    }
}

/// Map a button's `(action, value)` pair. `number` and `operator` need a
/// one-character value; the other actions ignore it.
pub fn action_for_button(action: &str, value: Option<&str>) -> Option<Action> {
    let single_char = || {
        let mut chars = value?.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some(c)
    };

    match action {
        "number" => single_char().and_then(Digit::from_char).map(Action::InputDigit),
        "operator" => single_char()
            .and_then(Operator::from_ascii)
            .map(Action::InputOperator),
        "decimal" => Some(Action::InputDecimal),
        "equals" => Some(Action::Calculate),
        "clear" => Some(Action::ClearAll),
        "delete" => Some(Action::Delete),
        "percent" => Some(Action::InputPercent),
        "negate" => Some(Action::Negate),
        _ => None,
    }
}
