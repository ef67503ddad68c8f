//! # Display Component
//!
//! The calculator's two-line readout, right aligned like a pocket calculator:
//!
//! ```text
//! ┌ Tally ──────────────┐
//! │                12 + │   previous (dim)
//! │                   7 │   current (bold)
//! └─────────────────────┘
//! ```
//!
//! The current line switches to the error color while the engine shows
//! `Error`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::DisplaySnapshot;
use crate::tui::component::Component;

/// Rows the panel needs: two borders plus two lines.
pub const HEIGHT: u16 = 4;

pub struct DisplayPanel<'a> {
    pub snapshot: &'a DisplaySnapshot,
    pub accent: Color,
    pub error_color: Color,
}

impl<'a> DisplayPanel<'a> {
    pub fn new(snapshot: &'a DisplaySnapshot, accent: Color, error_color: Color) -> Self {
        Self {
            snapshot,
            accent,
            error_color,
        }
    }
}

impl Component for DisplayPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let current_style = if self.snapshot.is_error() {
            Style::default()
                .fg(self.error_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::styled(
                self.snapshot.previous.as_str(),
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(self.snapshot.current.as_str(), current_style),
        ];

        let panel = Paragraph::new(lines).alignment(Alignment::Right).block(
            Block::bordered()
                .title(" Tally ")
                .border_style(Style::default().fg(self.accent)),
        );
        frame.render_widget(panel, area);
    }
}
