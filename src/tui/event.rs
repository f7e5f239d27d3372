use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    // Core actions (passed to core::update)
    ForceQuit, // Ctrl+C
    Quit,      // q
    Submit,    // Enter - activate the sidebar item under the cursor
    Escape,    // Esc - clear the current selection
    Retry,     // r - retry a failed fetch

    // TUI-local events (handled directly in TUI)
    CursorUp,
    CursorDown,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    MouseMove(u16, u16),
    MouseClick(u16, u16),
    Resize,
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if !event::poll(timeout).unwrap_or(false) {
        return None;
    }
    let Ok(raw) = event::read() else {
        return None;
    };
    match raw {
        Event::Key(key_event) => match (key_event.modifiers, key_event.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
            (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
            (_, KeyCode::Char('r')) => Some(TuiEvent::Retry),
            (_, KeyCode::Enter) => Some(TuiEvent::Submit),
            (_, KeyCode::Esc) => Some(TuiEvent::Escape),
            (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
            (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
            (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
            (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
            _ => None,
        },
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Moved => {
                Some(TuiEvent::MouseMove(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}
