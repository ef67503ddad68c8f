use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use std::io;
use std::time::Duration;

use crate::core::keymap::Key;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Handled by the TUI loop itself
    Quit,
    Resize,

    // Forwarded to the calculator through the key map
    Key(Key),

    // Routed to the keypad for hit testing
    MouseClick(u16, u16),
}

/// Poll for an event, blocking up to `timeout`
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Translate a crossterm event. Anything the calculator doesn't care about is `None`.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Terminals with the kitty protocol also report releases
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );

    let ctrl_or_alt = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match (ctrl_or_alt, key_event.code) {
        (true, KeyCode::Char('c' | 'q')) => Some(TuiEvent::Quit),
        (true, _) => None,
        (false, KeyCode::Char(c)) => Some(TuiEvent::Key(Key::Char(c))),
        (false, KeyCode::Enter) => Some(TuiEvent::Key(Key::Enter)),
        (false, KeyCode::Backspace) => Some(TuiEvent::Key(Key::Backspace)),
        (false, KeyCode::Esc) => Some(TuiEvent::Key(Key::Escape)),
        _ => None,
    }
}
