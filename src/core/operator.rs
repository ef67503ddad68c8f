//! # Operators
//!
//! The four arithmetic operators. Each knows its display glyph, the ASCII
//! character a keyboard sends for it, and how to apply itself.

use serde::Serialize;

use super::error::ArithmeticError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Parse the ASCII character used on keyboards and in button values.
    pub fn from_ascii(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn ascii(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Glyph shown in the "previous" line and on the keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply to two operands. A zero divisor (either sign) is an error;
    /// everything else returns the raw IEEE result, finite or not.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ArithmeticError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}
