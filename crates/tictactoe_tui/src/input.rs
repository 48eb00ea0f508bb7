//! Keyboard input mapping.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// Which widget receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The board size field.
    SizeInput,
    /// The game board.
    Board,
}

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Press the start/restart control.
    Confirm,
    /// Place a mark under the cursor.
    Tap,
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Type a character into the size field.
    Type(char),
    /// Delete the last character of the size field.
    Backspace,
    /// Switch focus between the size field and the board.
    SwitchFocus,
    /// Key has no meaning here.
    Nothing,
}

/// Maps a key to an action for the focused widget.
pub fn action_for(key: KeyCode, focus: Focus) -> Action {
    match (focus, key) {
        (_, KeyCode::Esc) => Action::Quit,
        (_, KeyCode::Tab) => Action::SwitchFocus,
        (_, KeyCode::Char('r')) => Action::Confirm,

        (Focus::SizeInput, KeyCode::Enter) => Action::Confirm,
        (Focus::SizeInput, KeyCode::Backspace) => Action::Backspace,
        (Focus::SizeInput, KeyCode::Char(c)) if c.is_ascii_digit() || c == '-' => Action::Type(c),
        (Focus::SizeInput, KeyCode::Char('q')) => Action::Quit,

        (Focus::Board, KeyCode::Enter | KeyCode::Char(' ')) => Action::Tap,
        (Focus::Board, KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Action::Cursor(key)
        }
        (Focus::Board, KeyCode::Char('q')) => Action::Quit,

        _ => Action::Nothing,
    }
}

/// Moves the cursor based on arrow keys, staying on an N×N board.
pub fn move_cursor(cursor: Position, key: KeyCode, size: usize) -> Position {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Right if cursor.col < last => Position::new(cursor.row, cursor.col + 1),
        KeyCode::Left if cursor.col > 0 => Position::new(cursor.row, cursor.col - 1),
        KeyCode::Down if cursor.row < last => Position::new(cursor.row + 1, cursor.col),
        KeyCode::Up if cursor.row > 0 => Position::new(cursor.row - 1, cursor.col),
        // No change for other keys or edge cases
        _ => cursor,
    }
}
