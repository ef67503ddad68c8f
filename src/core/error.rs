//! # Arithmetic Errors
//!
//! The only thing that can go wrong inside the engine is arithmetic.
//! These never escape to callers: the engine absorbs them into its
//! `Error` display state and keeps the cause around for the status bar.

use thiserror::Error;

/// Why a calculation landed in the error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// An operand couldn't be read as a number.
    #[error("Invalid number")]
    UnparsableOperand,
    /// The divisor was zero.
    #[error("Division by zero")]
    DivisionByZero,
    /// The result overflowed or was NaN.
    #[error("Result out of range")]
    NonFiniteResult,
}
