use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DisplayPanel, TitleBar, display};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

const HINT: &str = "Enter =  Bksp ⌫  Esc C  Ctrl+Q quit";

pub fn draw_ui(frame: &mut Frame, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(display::HEIGHT), Min(0), Length(1)]);
    let [title_area, display_area, keypad_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(tui.status.clone()).render(frame, title_area);
    DisplayPanel::new(&tui.display, tui.accent, tui.error_color).render(frame, display_area);

    if tui.show_keypad {
        tui.keypad.render(frame, keypad_area);
    }

    let hint = Paragraph::new(HINT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, hint_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Action;
    use crate::core::config::ResolvedConfig;
    use crate::test_support::calculator_after;
    use crate::tui::event::TuiEvent;
    use crate::tui::handle_event;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_full_layout() {
        let mut tui = TuiState::new(&ResolvedConfig::default());
        let text = render(&mut tui, 40, 24);

        assert!(text.contains("Tally v"));
        assert!(text.contains("Keypad"));
        assert!(text.contains("Ctrl+Q"));
    }

    #[test]
    fn test_keypad_hidden() {
        let config = ResolvedConfig {
            show_keypad: false,
            ..ResolvedConfig::default()
        };
        let mut tui = TuiState::new(&config);
        let text = render(&mut tui, 40, 24);

        assert!(text.contains("Tally v"));
        assert!(!text.contains("Keypad"));
    }

    #[test]
    fn test_clicks_land_on_rendered_keypad() {
        let mut calculator = calculator_after("12");
        let mut tui = TuiState::new(&ResolvedConfig::default());
        tui.display = calculator.snapshot();
        render(&mut tui, 40, 24);

        // Title 1 + display 4 puts the keypad border at y=5, first row at y=6
        handle_event(&mut calculator, &mut tui, &TuiEvent::MouseClick(3, 7));
        assert_eq!(tui.keypad.pressed(), Some(Action::ClearAll));
        assert_eq!(tui.display.current, "0");

        let text = render(&mut tui, 40, 24);
        assert!(!text.contains("12"));
    }
}
