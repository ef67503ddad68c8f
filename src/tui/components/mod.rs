//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: app name and status line
//! - `DisplayPanel`: the two-line readout, borrowed from a `DisplaySnapshot`
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `Keypad`: clickable buttons. Caches its layout on render and turns
//!   mouse clicks into `Action`s.
//!
//! Components never touch the calculator. They receive props and emit
//! actions; the TUI loop feeds those to `core::update()`.
//!
//! ```text
//! components/
//! ├── mod.rs        (this file)
//! ├── title_bar.rs
//! ├── display.rs
//! └── keypad.rs
//! ```

pub mod display;
pub mod keypad;
mod title_bar;

pub use display::DisplayPanel;
pub use keypad::Keypad;
pub use title_bar::TitleBar;
