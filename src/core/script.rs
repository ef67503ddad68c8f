//! # Key Scripts
//!
//! A script is a string of key presses, e.g. `"12+7="`. Plain characters
//! go through the keyboard map and unmapped ones are skipped, just like a
//! real keyboard. Keys without a character and keypad-only buttons are
//! written as brace tokens:
//!
//! ```text
//! {enter}             Enter
//! {bs} {backspace}    Backspace
//! {esc} {escape}      Escape
//! {negate} {clear} {delete} {equals} {percent} {decimal}   buttons
//! ```
//!
//! So `"50{negate}%"` negates 50 and takes a percent: `-0.5`.

use log::debug;
use thiserror::Error;

use super::action::Action;
use super::keymap::{Key, action_for_button, action_for_key};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unknown token {{{token}}} at position {position}")]
    UnknownToken { token: String, position: usize },
    #[error("unterminated token starting at position {position}")]
    Unterminated { position: usize },
}

/// Parse a script into the actions it produces.
pub fn parse(script: &str) -> Result<Vec<Action>, ScriptError> {
    let mut actions = Vec::new();
    let mut chars = script.char_indices();

    while let Some((position, c)) = chars.next() {
        if c != '{' {
            match action_for_key(Key::Char(c)) {
                Some(action) => actions.push(action),
                None => debug!("Script: ignoring unmapped key {:?}", c),
            }
            continue;
        }

        let mut token = String::new();
        let mut closed = false;
        for (_, c) in chars.by_ref() {
            if c == '}' {
                closed = true;
                break;
            }
            token.push(c);
        }
        if !closed {
            return Err(ScriptError::Unterminated { position });
        }

        let action = token_action(&token.to_ascii_lowercase())
            .ok_or(ScriptError::UnknownToken { token, position })?;
        actions.push(action);
    }

    Ok(actions)
}

fn token_action(token: &str) -> Option<Action> {
    match token {
        "enter" => action_for_key(Key::Enter),
        "bs" | "backspace" => action_for_key(Key::Backspace),
        "esc" | "escape" => action_for_key(Key::Escape),
        button => action_for_button(button, None),
    }
}
