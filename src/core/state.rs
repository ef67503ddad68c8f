//! # Calculator State
//!
//! The engine. Holds everything the calculator knows and exposes one
//! method per user action. Each method mutates the state and hands back a
//! `DisplaySnapshot` for whatever adapter is rendering.
//!
//! ```text
//! Calculator
//! ├── current: Entry                    // value being typed, or Error
//! ├── pending: Option<PendingOperation> // operand + operator awaiting a right side
//! └── awaiting_fresh_operand: bool      // next digit starts a new operand
//! ```
//!
//! Failures never leave the engine. Division by zero and friends move it
//! into the `Error` entry, which any digit or clear recovers from.

use log::{debug, warn};
use serde::Serialize;

use super::action::Digit;
use super::error::ArithmeticError;
use super::number::{self, MAX_DISPLAY_LEN};
use super::operator::Operator;

/// What the display shows while the engine is in its error state.
pub const ERROR_TEXT: &str = "Error";

/// The value in the main display.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Numeral(String),
    Error(ArithmeticError),
}

impl Entry {
    fn zero() -> Self {
        Entry::Numeral("0".to_string())
    }

    fn text(&self) -> &str {
        match self {
            Entry::Numeral(text) => text,
            Entry::Error(_) => ERROR_TEXT,
        }
    }
}

/// An operator waiting for its right-hand operand.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingOperation {
    /// Never empty: captured from the current numeral.
    operand: String,
    operator: Operator,
}

/// The two display lines an adapter renders after every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySnapshot {
    pub current: String,
    /// `"<operand> <symbol>"` while an operator is pending, else empty.
    pub previous: String,
}

impl DisplaySnapshot {
    pub fn is_error(&self) -> bool {
        self.current == ERROR_TEXT
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    current: Entry,
    pending: Option<PendingOperation>,
    awaiting_fresh_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            current: Entry::zero(),
            pending: None,
            awaiting_fresh_operand: false,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// Main display text: a numeral or `"Error"`.
    pub fn current(&self) -> &str {
        self.current.text()
    }

    pub fn pending_operand(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.operand.as_str())
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.as_ref().map(|p| p.operator)
    }

    pub fn is_awaiting_fresh_operand(&self) -> bool {
        self.awaiting_fresh_operand
    }

    /// Cause of the current error state, if any.
    pub fn error(&self) -> Option<ArithmeticError> {
        match self.current {
            Entry::Error(err) => Some(err),
            Entry::Numeral(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.current, Entry::Error(_))
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        let previous = match &self.pending {
            Some(p) => format!("{} {}", p.operand, p.operator.symbol()),
            None => String::new(),
        };
        DisplaySnapshot {
            current: self.current().to_string(),
            previous,
        }
    }

    // ── Actions ─────────────────────────────────────────────────────────────

    pub fn input_digit(&mut self, digit: Digit) -> DisplaySnapshot {
        let d = digit.as_char();
        if self.is_error() {
            self.current = Entry::Numeral(d.to_string());
            self.awaiting_fresh_operand = false;
            return self.snapshot();
        }

        if let Entry::Numeral(text) = &mut self.current {
            if self.awaiting_fresh_operand {
                *text = d.to_string();
                self.awaiting_fresh_operand = false;
            } else if *text == "0" {
                *text = d.to_string();
            } else if text.chars().count() < MAX_DISPLAY_LEN {
                text.push(d);
            }
        }
        self.snapshot()
    }

    pub fn input_decimal(&mut self) -> DisplaySnapshot {
        if let Entry::Numeral(text) = &mut self.current {
            if self.awaiting_fresh_operand {
                *text = "0.".to_string();
                self.awaiting_fresh_operand = false;
            } else if !text.contains('.') {
                text.push('.');
            }
        }
        self.snapshot()
    }

    pub fn input_operator(&mut self, operator: Operator) -> DisplaySnapshot {
        if self.is_error() {
            return self.snapshot();
        }

        // Chain: "1 + 2 +" evaluates "1 + 2" before arming the new operator.
        if self.pending.is_some() && !self.awaiting_fresh_operand {
            self.calculate();
            if self.is_error() {
                return self.snapshot();
            }
        }

        self.pending = Some(PendingOperation {
            operand: self.current().to_string(),
            operator,
        });
        self.awaiting_fresh_operand = true;
        self.snapshot()
    }

    /// The equals key. Does nothing unless an operator is pending.
    pub fn calculate(&mut self) -> DisplaySnapshot {
        let Some(pending) = self.pending.as_ref().filter(|p| !p.operand.is_empty()) else {
            return self.snapshot();
        };

        match evaluate(&pending.operand, pending.operator, self.current()) {
            Ok(result) => {
                debug!(
                    "Calculated {} {} {} = {}",
                    pending.operand,
                    pending.operator.symbol(),
                    self.current(),
                    result
                );
                self.current = Entry::Numeral(result);
                self.pending = None;
                self.awaiting_fresh_operand = true;
            }
            Err(err) => self.fail(err),
        }
        self.snapshot()
    }

    /// Backspace.
    pub fn delete(&mut self) -> DisplaySnapshot {
        if self.is_error() {
            return self.clear_all();
        }

        if let Entry::Numeral(text) = &mut self.current {
            if self.awaiting_fresh_operand {
                *text = "0".to_string();
                self.awaiting_fresh_operand = false;
            } else {
                text.pop();
                if text.is_empty() || *text == "-" {
                    *text = "0".to_string();
                }
            }
        }
        self.snapshot()
    }

    pub fn clear_all(&mut self) -> DisplaySnapshot {
        *self = Self::new();
        self.snapshot()
    }

    /// Divide the current value by 100.
    ///
    /// Unlike `calculate`, the result isn't squeezed into the display width.
    pub fn input_percent(&mut self) -> DisplaySnapshot {
        if let Entry::Numeral(text) = &mut self.current
            && let Some(value) = number::parse_operand(text)
            && value.is_finite()
        {
            *text = number::canonical(value / 100.0);
        }
        self.snapshot()
    }

    /// Toggle the sign of the current value.
    pub fn negate(&mut self) -> DisplaySnapshot {
        if let Entry::Numeral(text) = &mut self.current
            && *text != "0"
        {
            if let Some(stripped) = text.strip_prefix('-') {
                *text = stripped.to_string();
            } else {
                text.insert(0, '-');
            }
        }
        self.snapshot()
    }

    fn fail(&mut self, err: ArithmeticError) {
        warn!("Calculation failed: {}", err);
        self.current = Entry::Error(err);
        self.pending = None;
        self.awaiting_fresh_operand = true;
    }
}

/// `lhs op rhs`, rounded and formatted for the display.
fn evaluate(lhs: &str, operator: Operator, rhs: &str) -> Result<String, ArithmeticError> {
    let lhs = number::parse_operand(lhs).ok_or(ArithmeticError::UnparsableOperand)?;
    let rhs = number::parse_operand(rhs).ok_or(ArithmeticError::UnparsableOperand)?;

    let raw = operator.apply(lhs, rhs)?;
    if !raw.is_finite() {
        return Err(ArithmeticError::NonFiniteResult);
    }

    Ok(number::format_result(number::round_to_precision(raw)))
}
