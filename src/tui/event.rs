use crate::core::action::Action;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Resize(u16, u16),
    Up,
    Down,
    Tab,
    Quit,
    Other,
}

impl From<TuiEvent> for Action {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Resize(width, height) => Action::Resize { width, height },
            TuiEvent::Up => Action::MoveUp,
            TuiEvent::Down => Action::MoveDown,
            TuiEvent::Tab => Action::FocusToggle,
            TuiEvent::Quit => Action::Quit,
            TuiEvent::Other => Action::Ignore,
        }
    }
}

/// Block until the next event the dashboard cares about arrives.
pub fn next_event() -> std::io::Result<TuiEvent> {
    loop {
        if let Some(event) = map_event(event::read()?) {
            return Ok(event);
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> std::io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn poll_event_timeout(timeout: Duration) -> std::io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(map_event(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a crossterm event. Focus, paste and key-release events map to
/// `None` since they never change the dashboard.
pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Some(map_key(key_event))
        }
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> TuiEvent {
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => TuiEvent::Quit,
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => TuiEvent::Quit,
        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => TuiEvent::Up,
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => TuiEvent::Down,
        (_, KeyCode::Tab) => TuiEvent::Tab,
        _ => TuiEvent::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_map_navigation_keys() {
        assert_eq!(map_event(key(KeyCode::Up)), Some(TuiEvent::Up));
        assert_eq!(map_event(key(KeyCode::Char('k'))), Some(TuiEvent::Up));
        assert_eq!(map_event(key(KeyCode::Down)), Some(TuiEvent::Down));
        assert_eq!(map_event(key(KeyCode::Char('j'))), Some(TuiEvent::Down));
        assert_eq!(map_event(key(KeyCode::Tab)), Some(TuiEvent::Tab));
    }

    #[test]
    fn test_map_quit_keys() {
        assert_eq!(map_event(key(KeyCode::Char('q'))), Some(TuiEvent::Quit));
        assert_eq!(map_event(key(KeyCode::Esc)), Some(TuiEvent::Quit));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(ctrl_c), Some(TuiEvent::Quit));
    }

    #[test]
    fn test_unbound_key_is_other() {
        assert_eq!(map_event(key(KeyCode::Char('x'))), Some(TuiEvent::Other));
        assert_eq!(map_event(key(KeyCode::Enter)), Some(TuiEvent::Other));
        // Plain 'c' without Ctrl doesn't quit
        assert_eq!(map_event(key(KeyCode::Char('c'))), Some(TuiEvent::Other));
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut release = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_resize_and_focus_events() {
        assert_eq!(map_event(Event::Resize(100, 40)), Some(TuiEvent::Resize(100, 40)));
        assert_eq!(map_event(Event::FocusGained), None);
    }

    #[test]
    fn test_event_to_action() {
        assert_eq!(
            Action::from(TuiEvent::Resize(80, 24)),
            Action::Resize { width: 80, height: 24 }
        );
        assert_eq!(Action::from(TuiEvent::Tab), Action::FocusToggle);
        assert_eq!(Action::from(TuiEvent::Other), Action::Ignore);
    }
}
