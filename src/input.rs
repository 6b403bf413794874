//! Key-press routing
//!
//! Maps raw terminal key events to game actions: a plain lowercase letter is
//! a guess, Enter restarts the round, and everything else is ignored. Only
//! press events are routed, so one physical key stroke maps to at most one
//! action.

use crate::core::Letter;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An action produced by the input router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Guess a single letter
    Guess(Letter),
    /// Start a new round, regardless of the current phase
    Restart,
}

/// Translate a raw key event into a game action
///
/// Accepts exactly the lowercase letters `a`-`z` (unmodified) and Enter.
/// Uppercase input is not normalized; modified keys, other characters, and
/// repeat/release events produce no action.
#[must_use]
pub fn route(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if c.is_ascii_lowercase() && key.modifiers == KeyModifiers::NONE => {
            Letter::new(c).ok().map(Action::Guess)
        }
        KeyCode::Enter => Some(Action::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn lowercase_letter_routes_to_guess() {
        let action = route(&press(KeyCode::Char('h')));
        assert_eq!(action, Some(Action::Guess(Letter::new('h').unwrap())));
    }

    #[test]
    fn enter_routes_to_restart() {
        assert_eq!(route(&press(KeyCode::Enter)), Some(Action::Restart));
    }

    #[test]
    fn uppercase_letter_is_ignored() {
        // Exact lowercase match only - no case normalization
        assert_eq!(route(&press(KeyCode::Char('H'))), None);
    }

    #[test]
    fn digits_and_punctuation_are_ignored() {
        assert_eq!(route(&press(KeyCode::Char('1'))), None);
        assert_eq!(route(&press(KeyCode::Char('?'))), None);
        assert_eq!(route(&press(KeyCode::Char(' '))), None);
    }

    #[test]
    fn non_character_keys_are_ignored() {
        assert_eq!(route(&press(KeyCode::Tab)), None);
        assert_eq!(route(&press(KeyCode::Backspace)), None);
        assert_eq!(route(&press(KeyCode::Esc)), None);
        assert_eq!(route(&press(KeyCode::Up)), None);
    }

    #[test]
    fn modified_letters_are_ignored() {
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(route(&ctrl_a), None);

        let alt_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(route(&alt_a), None);
    }

    #[test]
    fn release_events_are_ignored() {
        // One key stroke must map to at most one action
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(route(&release), None);

        let repeat = KeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        );
        assert_eq!(route(&repeat), None);
    }
}
