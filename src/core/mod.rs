//! # Core Application Logic
//!
//! This module contains Tally's calculator logic.
//! The engine knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Calculator (state)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Headless  │
//!             │  Adapter   │          │   Script   │
//!             │ (ratatui)  │          │  (--keys)  │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Calculator` struct: all arithmetic state in one place
//! - [`action`]: The `Action` enum: everything a user can do
//! - [`keymap`]: Keys and keypad buttons → actions
//! - [`script`]: Strings of keys → actions, for headless runs
//! - [`number`]: Operand parsing, rounding and display formatting
//! - [`config`]: Settings file and override resolution

pub mod action;
pub mod config;
pub mod error;
pub mod keymap;
pub mod number;
pub mod operator;
pub mod script;
pub mod state;

// Re-export commonly used types for convenience
pub use action::{Action, Digit, update};
pub use error::ArithmeticError;
pub use operator::Operator;
pub use state::{Calculator, DisplaySnapshot};
