use chess::{Command, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into a board command. Keys without a binding, and
/// release/repeat events, yield `None` and are ignored by the loop.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Activate),
        _ => None,
    }
}
