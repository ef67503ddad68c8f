//! Tally library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod headless;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// How headless runs print the display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
