//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing on screen animates except the keypad's pressed button, which is
//! cleared by the next event. So the loop sleeps until an event arrives,
//! drains everything pending, and draws once.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::style::Color;

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::keymap::action_for_key;
use crate::core::state::{Calculator, DisplaySnapshot};
use crate::tui::component::EventHandler;
use crate::tui::components::Keypad;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the calculator)
pub struct TuiState {
    /// Latest display from `update()`
    pub display: DisplaySnapshot,
    /// Shown in the title bar
    pub status: String,
    pub keypad: Keypad,
    pub show_keypad: bool,
    pub accent: Color,
    pub error_color: Color,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            display: Calculator::new().snapshot(),
            status: String::new(),
            keypad: Keypad::new(config.accent_color),
            show_keypad: config.show_keypad,
            accent: config.accent_color,
            error_color: config.error_color,
        }
    }
}

/// What the loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Without disambiguation some terminals report Esc only after a delay
        execute!(
            stdout(),
            EnableMouseCapture,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), PopKeyboardEnhancementFlags, DisableMouseCapture);
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, config);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, config: &ResolvedConfig) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut calculator = Calculator::new();
    let mut tui = TuiState::new(config);
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL)?;
        if first_event.is_none() {
            continue;
        }

        // The flash from the previous batch ends as soon as anything happens
        tui.keypad.release();
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let pending = std::iter::from_fn(|| poll_event_immediate().transpose());
        for event in first_event.into_iter().map(Ok).chain(pending) {
            if handle_event(&mut calculator, &mut tui, &event?) == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}

/// Route one terminal event to the calculator.
fn handle_event(calculator: &mut Calculator, tui: &mut TuiState, event: &TuiEvent) -> Flow {
    match event {
        TuiEvent::Quit => return Flow::Quit,
        // Resize just needs a redraw
        TuiEvent::Resize => {}
        TuiEvent::Key(key) => {
            if let Some(action) = action_for_key(*key) {
                tui.keypad.flash(action);
                dispatch(calculator, tui, action);
            } else {
                debug!("Unmapped key: {:?}", key);
            }
        }
        TuiEvent::MouseClick(..) => {
            if !tui.show_keypad {
                return Flow::Continue;
            }
            if let Some(action) = tui.keypad.handle_event(event) {
                dispatch(calculator, tui, action);
            }
        }
    }
    Flow::Continue
}

/// Apply an action and sync the presentation state with the result.
fn dispatch(calculator: &mut Calculator, tui: &mut TuiState, action: Action) {
    tui.display = update(calculator, action);
    tui.keypad.active_operator = calculator.pending_operator();
    tui.status = calculator
        .error()
        .map(|err| err.to_string())
        .unwrap_or_default();
}
