//! Key events to game commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rewind_2048_core::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
    Restart,
    Quit,
}

/// Map one key event to a command.
///
/// Only plain keys count: arrows with any modifier, Alt/Super chords and
/// function keys are ignored. Shift is allowed on letters so caps lock keeps
/// working. Ctrl-C quits.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers == KeyModifiers::CONTROL {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }
    if !key.modifiers.difference(KeyModifiers::SHIFT).is_empty() {
        return None;
    }

    match key.code {
        // Arrow keys
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
            if !key.modifiers.is_empty() =>
        {
            None
        }
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),

        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => parse_char(c.to_ascii_lowercase()),
        _ => None,
    }
}

fn parse_char(c: char) -> Option<Command> {
    match c {
        // WASD keys
        'w' => Some(Command::Move(Direction::Up)),
        's' => Some(Command::Move(Direction::Down)),
        'a' => Some(Command::Move(Direction::Left)),
        'd' => Some(Command::Move(Direction::Right)),

        // Control keys
        'z' | 'u' => Some(Command::Undo),
        'r' => Some(Command::Restart),
        'q' => Some(Command::Quit),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(command_for(press(KeyCode::Up)), Some(Command::Move(Direction::Up)));
        assert_eq!(
            command_for(press(KeyCode::Down)),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            command_for(press(KeyCode::Left)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            command_for(press(KeyCode::Right)),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_any_case() {
        assert_eq!(
            command_for(press(KeyCode::Char('w'))),
            Some(Command::Move(Direction::Up))
        );
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Command::Move(Direction::Left))
        );
        assert_eq!(
            command_for(press(KeyCode::Char('S'))),
            Some(Command::Move(Direction::Down))
        );
        assert_eq!(
            command_for(press(KeyCode::Char('d'))),
            Some(Command::Move(Direction::Right))
        );
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(command_for(press(KeyCode::Char('z'))), Some(Command::Undo));
        assert_eq!(command_for(press(KeyCode::Char('U'))), Some(Command::Undo));
        assert_eq!(command_for(press(KeyCode::Char('r'))), Some(Command::Restart));
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_modified_arrows_ignored() {
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::SHIFT, KeyModifiers::ALT] {
            for code in [KeyCode::Up, KeyCode::Down, KeyCode::Left, KeyCode::Right] {
                assert_eq!(command_for(KeyEvent::new(code, modifiers)), None);
            }
        }
    }

    #[test]
    fn test_function_keys_and_alt_chords_ignored() {
        assert_eq!(command_for(press(KeyCode::F(1))), None);
        assert_eq!(command_for(press(KeyCode::F(12))), None);
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('w'), KeyModifiers::ALT)),
            None
        );
        assert_eq!(
            command_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(command_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Left,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(command_for(release), None);
    }
}
