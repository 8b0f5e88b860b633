use crate::limit::Direction;
use crate::session::Session;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Engine-level input events. Quit and window resize never reach the
/// engine; they are handled by the outer loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Type(char),
    Backspace,
    /// Replace the whole exercise with a fresh target.
    Next,
    /// Retry the current target from the top.
    Reset,
    LimitUp,
    LimitDown,
}

/// Translate a terminal key event into an engine event, if it maps to one.
pub fn map_key(key: KeyEvent) -> Option<SessionEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(SessionEvent::Next),
        KeyCode::Backspace => Some(SessionEvent::Backspace),
        KeyCode::Up => Some(SessionEvent::LimitUp),
        KeyCode::Down => Some(SessionEvent::LimitDown),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionEvent::Reset)
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(SessionEvent::Type(c))
        }
        _ => None,
    }
}

/// Apply one engine event to the session.
pub fn apply(session: &mut Session, event: SessionEvent) {
    match event {
        SessionEvent::Type(c) => session.write(c),
        SessionEvent::Backspace => session.backspace(),
        SessionEvent::Next => session.next(),
        SessionEvent::Reset => session.reset_play(),
        SessionEvent::LimitUp => session.cycle_limit(Direction::Up),
        SessionEvent::LimitDown => session.cycle_limit(Direction::Down),
    }
}
