//! # TitleBar Component
//!
//! Top status line: the app name and version, plus a transient status
//! such as the reason behind an `Error` on the display.
//!
//! Purely presentational. It receives everything as props:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Division by zero".to_string());
//! title_bar.render(frame, area);
//! ```
//!
//! With a status: `"Tally v0.1.0 | Division by zero"`.
//! Without: `"Tally v0.1.0"`.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Status message, empty when there is nothing to report
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    fn title_text(&self) -> String {
        let name = format!("Tally v{}", env!("CARGO_PKG_VERSION"));
        if self.status_message.is_empty() {
            name
        } else {
            format!("{} | {}", name, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}
