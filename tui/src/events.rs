use chop_core::{Key, Symbol};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

pub enum AppEvent {
    /// A key meant for the challenge.
    Key(Key),
    Quit,
}

/// Pulls terminal events that arrived since the last frame.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns the next pending event, or `None` once the queue is empty.
    ///
    /// Never blocks; events that mean nothing to the game (mouse, resize,
    /// key releases) are skipped.
    pub fn next(&mut self) -> std::io::Result<Option<AppEvent>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(evt) = map_key(key) {
                    return Ok(Some(evt));
                }
            }
        }
        Ok(None)
    }
}

/// Translate a crossterm key press into an application event.
pub fn map_key(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // application-wide CTRL+C handler
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
    {
        return Some(AppEvent::Quit);
    }

    let key = match key.code {
        KeyCode::Esc => return Some(AppEvent::Quit),
        KeyCode::Enter => Key::Confirm,
        KeyCode::Char(c) => Symbol::from_char(c).map_or(Key::Other, Key::from),
        _ => Key::Other,
    };
    Some(AppEvent::Key(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_of(event: Option<AppEvent>) -> Option<Key> {
        match event {
            Some(AppEvent::Key(key)) => Some(key),
            _ => None,
        }
    }

    #[test]
    fn test_letters_map_to_symbols() {
        assert_eq!(key_of(map_key(press(KeyCode::Char('q')))), Some(Key::Symbol(Symbol::Q)));
        assert_eq!(key_of(map_key(press(KeyCode::Char('D')))), Some(Key::Symbol(Symbol::D)));
        assert_eq!(key_of(map_key(press(KeyCode::Char('x')))), Some(Key::Other));
        assert_eq!(key_of(map_key(press(KeyCode::Tab))), Some(Key::Other));
    }

    #[test]
    fn test_enter_confirms() {
        assert_eq!(key_of(map_key(press(KeyCode::Enter))), Some(Key::Confirm));
    }

    #[test]
    fn test_quit_keys() {
        assert!(matches!(map_key(press(KeyCode::Esc)), Some(AppEvent::Quit)));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(map_key(ctrl_c), Some(AppEvent::Quit)));
    }

    #[test]
    fn test_releases_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(map_key(release).is_none());
    }
}
