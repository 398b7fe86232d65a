//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::RotateCw),

        // Game control
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key starts a game that is waiting on the title screen.
pub fn is_start_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('H'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('d'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('J'))),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::RotateCw)
        );
        // No counter-clockwise rotation.
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Esc)),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_start_keys() {
        assert!(is_start_key(KeyEvent::from(KeyCode::Enter)));
        assert!(is_start_key(KeyEvent::from(KeyCode::Char(' '))));
        assert!(!is_start_key(KeyEvent::from(KeyCode::Left)));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
