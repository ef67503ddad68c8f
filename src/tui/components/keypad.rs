//! # Keypad Component
//!
//! The on-screen buttons. Clicking one dispatches its action, exactly like
//! pressing the matching key.
//!
//! ```text
//! [ C ] [ ⌫ ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ ± ] [ 0 ] [ . ] [ = ]
//! ```
//!
//! ## State
//!
//! - `active_operator` (prop): the engine's pending operator, drawn highlighted
//! - `pressed`: the last button hit, drawn reversed until the next event
//! - `cells`: button rectangles from the last render, used for hit testing

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::action::Action;
use crate::core::keymap::action_for_button;
use crate::core::operator::Operator;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// Button layout as `(action, value)` pairs, row-major.
const LAYOUT: [(&str, Option<&str>); ROWS * COLS] = [
    ("clear", None),
    ("delete", None),
    ("percent", None),
    ("operator", Some("/")),
    ("number", Some("7")),
    ("number", Some("8")),
    ("number", Some("9")),
    ("operator", Some("*")),
    ("number", Some("4")),
    ("number", Some("5")),
    ("number", Some("6")),
    ("operator", Some("-")),
    ("number", Some("1")),
    ("number", Some("2")),
    ("number", Some("3")),
    ("operator", Some("+")),
    ("negate", None),
    ("number", Some("0")),
    ("decimal", None),
    ("equals", None),
];

pub struct Keypad {
    buttons: Vec<Action>,
    /// Pending operator in the engine (Prop)
    pub active_operator: Option<Operator>,
    /// Color for operators and the border (Prop)
    pub accent: Color,
    pressed: Option<usize>,
    cells: Vec<Rect>,
}

impl Keypad {
    pub fn new(accent: Color) -> Self {
        let buttons = LAYOUT
            .iter()
            .filter_map(|&(action, value)| action_for_button(action, value))
            .collect();
        Self {
            buttons,
            active_operator: None,
            accent,
            pressed: None,
            cells: Vec::new(),
        }
    }

    #[cfg(test)]
    fn buttons(&self) -> &[Action] {
        &self.buttons
    }

    #[cfg(test)]
    fn button_at(&self, row: usize, col: usize) -> Option<Action> {
        if row < ROWS && col < COLS {
            self.buttons.get(row * COLS + col).copied()
        } else {
            None
        }
    }

    pub fn pressed(&self) -> Option<Action> {
        self.pressed.and_then(|i| self.buttons.get(i).copied())
    }

    /// Mark the button for `action` as pressed, e.g. when its key was typed.
    pub fn flash(&mut self, action: Action) {
        self.pressed = self.buttons.iter().position(|&b| b == action);
    }

    pub fn release(&mut self) {
        self.pressed = None;
    }

    /// Index of the button drawn at a screen position, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.cells.iter().position(|cell| cell.contains(position))
    }

    fn button_style(&self, action: Action, pressed: bool) -> Style {
        let style = match action {
            Action::InputOperator(op) if self.active_operator == Some(op) => Style::default()
                .fg(Color::Black)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD),
            Action::InputOperator(_) => Style::default().fg(self.accent),
            Action::InputDigit(_) | Action::InputDecimal => Style::default().fg(Color::White),
            Action::Calculate => Style::default().fg(Color::Green),
            Action::ClearAll => Style::default().fg(Color::Red),
            Action::Delete | Action::InputPercent | Action::Negate => {
                Style::default().fg(Color::Gray)
            }
        };
        if pressed {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

fn split_evenly(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    row_areas
        .iter()
        .flat_map(|&row| {
            Layout::horizontal(vec![Constraint::Ratio(1, cols as u32); cols])
                .split(row)
                .to_vec()
        })
        .collect()
}

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Keypad ")
            .border_style(Style::default().fg(self.accent).add_modifier(Modifier::DIM));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < COLS as u16 || inner.height < ROWS as u16 {
            // Too small to draw or click
            self.cells.clear();
            return;
        }

        self.cells = split_evenly(inner, ROWS, COLS);

        for (index, (&action, &cell)) in self.buttons.iter().zip(&self.cells).enumerate() {
            let style = self.button_style(action, self.pressed == Some(index));
            let label = action.label();

            if cell.height >= 3 {
                let padding = Padding::top(cell.height.saturating_sub(3) / 2);
                let button = Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::bordered().border_style(style).padding(padding));
                frame.render_widget(button, cell);
            } else {
                let middle = Rect {
                    y: cell.y + cell.height / 2,
                    height: 1,
                    ..cell
                };
                let button = Paragraph::new(format!("[{}]", label))
                    .alignment(Alignment::Center)
                    .style(style);
                frame.render_widget(button, middle);
            }
        }
    }
}

impl EventHandler for Keypad {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let TuiEvent::MouseClick(column, row) = *event else {
            return None;
        };
        let index = self.hit_test(column, row)?;
        self.pressed = Some(index);
        self.buttons.get(index).copied()
    }
}
