//! Application state and logic.
//!
//! `App` is the presentation layer: it owns the text of the size field, the
//! board cursor and the status line, and forwards configure/restart requests
//! and cell taps to the engine. It never edits the board itself.

use crate::input::{Action, Focus, action_for, move_cursor};
use crossterm::event::KeyCode;
use tictactoe_engine::{BoardSize, EngineError, GameEngine, GameState, MoveOutcome, Position};
use tracing::{debug, error, info, instrument, warn};

/// Shown when the size field does not hold a usable size.
pub const INVALID_SIZE_MESSAGE: &str = "Enter valid grid size!";

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Option<GameEngine>,
    size_input: String,
    cursor: Position,
    focus: Focus,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates the application with `size_input` prefilled in the size field.
    pub fn new(size_input: impl Into<String>) -> Self {
        Self {
            engine: None,
            size_input: size_input.into(),
            cursor: Position::new(0, 0),
            focus: Focus::SizeInput,
            status_message: "Enter a board size and press Enter".to_string(),
            should_quit: false,
        }
    }

    /// Gets the current game, if one has been configured.
    pub fn game(&self) -> Option<&GameState> {
        self.engine.as_ref().map(GameEngine::state)
    }

    /// Text currently in the size field.
    pub fn size_input(&self) -> &str {
        &self.size_input
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Widget receiving typed keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The start/restart control and the size field are usable only while
    /// no game is running.
    pub fn control_enabled(&self) -> bool {
        self.game().is_none_or(|game| game.status().is_terminal())
    }

    /// Label of the start/restart control.
    pub fn control_label(&self) -> &'static str {
        match self.game() {
            None => "Start",
            Some(game) if game.status().is_terminal() => "Press to Restart",
            Some(_) => "Tap to Play",
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for(key, self.focus);
        debug!(?action, "Handling key");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Confirm => self.confirm_size(),
            Action::Tap => self.tap(self.cursor),
            Action::Cursor(key) => {
                if let Some(size) = self.game().map(|game| game.board().size()) {
                    self.cursor = move_cursor(self.cursor, key, size);
                }
            }
            Action::Type(c) if self.control_enabled() => self.size_input.push(c),
            Action::Backspace if self.control_enabled() => {
                self.size_input.pop();
            }
            Action::SwitchFocus => self.switch_focus(),
            Action::Type(_) | Action::Backspace | Action::Nothing => {}
        }
    }

    /// Confirms the size field: starts a game, or restarts a finished one.
    ///
    /// The same size restarts on a fresh board; a different size replaces
    /// the game entirely.
    #[instrument(skip(self), fields(input = %self.size_input))]
    pub fn confirm_size(&mut self) {
        if !self.control_enabled() {
            debug!("Game in progress, confirm ignored");
            return;
        }

        let size = match BoardSize::parse(&self.size_input) {
            Ok(size) => size,
            Err(e) => {
                warn!(error = %e, "Rejected board size");
                self.status_message = INVALID_SIZE_MESSAGE.to_string();
                return;
            }
        };

        match &mut self.engine {
            Some(engine) if engine.size() == size => engine.restart(),
            slot => *slot = Some(GameEngine::with_size(size)),
        }
        info!(%size, "Game started");

        self.cursor = Position::new(0, 0);
        self.focus = Focus::Board;
        self.refresh_status();
    }

    /// Forwards a cell tap to the engine and updates the status line.
    #[instrument(skip(self))]
    pub fn tap(&mut self, pos: Position) {
        let Some(engine) = self.engine.as_mut() else {
            debug!("No game yet, tap ignored");
            return;
        };

        match engine.apply(pos) {
            Ok(result) => match result.outcome() {
                MoveOutcome::Ignored => debug!("Tap ignored"),
                outcome => {
                    debug!(%outcome, "Move applied to UI state");
                    self.status_message = result.state().status_line();
                    if outcome.is_terminal() {
                        self.focus = Focus::SizeInput;
                    }
                }
            },
            Err(e @ EngineError::OutOfBounds { .. }) => {
                // The cursor is clamped to the board, so this is a bug.
                error!(error = %e, "Tap outside the board");
                debug_assert!(false, "{e}");
            }
            Err(e) => error!(error = %e, "Unexpected engine error"),
        }
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::SizeInput if self.engine.is_some() => Focus::Board,
            Focus::SizeInput => Focus::SizeInput,
            Focus::Board => Focus::SizeInput,
        };
    }

    fn refresh_status(&mut self) {
        if let Some(game) = self.game() {
            self.status_message = game.status_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{GameStatus, Player, Square};

    fn started(size: &str) -> App {
        let mut app = App::new(size);
        app.confirm_size();
        app
    }

    fn tap_all(app: &mut App, cells: &[(usize, usize)]) {
        for &(row, col) in cells {
            app.tap(Position::new(row, col));
        }
    }

    #[test]
    fn test_start_game() {
        let app = started("4");
        let game = app.game().unwrap();
        assert_eq!(game.board().size(), 4);
        assert_eq!(app.status_message(), "Player 1's Turn");
        assert_eq!(app.control_label(), "Tap to Play");
        assert!(!app.control_enabled());
        assert_eq!(app.focus(), Focus::Board);
    }

    #[test]
    fn test_invalid_size_message() {
        for input in ["0", "-1", "", "abc"] {
            let app = started(input);
            assert!(app.game().is_none());
            assert_eq!(app.status_message(), INVALID_SIZE_MESSAGE);
            assert_eq!(app.control_label(), "Start");
        }
    }

    #[test]
    fn test_size_field_locked_during_game() {
        let mut app = started("3");
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus(), Focus::SizeInput);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.size_input(), "3");
    }

    #[test]
    fn test_keyboard_play_to_win() {
        let mut app = started("3");
        // Player 1 takes the top row while Player 2 plays the middle row.
        for key in [
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::Enter,
            KeyCode::Down,
            KeyCode::Enter,
            KeyCode::Up,
            KeyCode::Right,
            KeyCode::Enter,
        ] {
            app.handle_key(key);
        }

        let game = app.game().unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::One));
        assert_eq!(app.status_message(), "Player 1 Wins!");
        assert_eq!(app.control_label(), "Press to Restart");
        assert!(app.control_enabled());
    }

    #[test]
    fn test_occupied_tap_keeps_status() {
        let mut app = started("3");
        app.tap(Position::new(0, 0));
        assert_eq!(app.status_message(), "Player 2's Turn");
        app.tap(Position::new(0, 0));
        assert_eq!(app.status_message(), "Player 2's Turn");
        assert_eq!(app.game().unwrap().current_player(), Player::Two);
    }

    #[test]
    fn test_restart_same_size_clears_board() {
        let mut app = started("3");
        tap_all(&mut app, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(app.control_enabled());

        app.confirm_size();
        let game = app.game().unwrap();
        assert_eq!(game.board().size(), 3);
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(app.status_message(), "Player 1's Turn");
    }

    #[test]
    fn test_resize_after_game_over() {
        let mut app = started("1");
        app.tap(Position::new(0, 0));
        assert_eq!(app.status_message(), "Player 1 Wins!");
        assert_eq!(app.focus(), Focus::SizeInput);

        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().unwrap().board().size(), 5);
    }

    #[test]
    fn test_restart_key_after_game_over() {
        let mut app = started("3");
        tap_all(&mut app, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(app.focus(), Focus::SizeInput);

        app.handle_key(KeyCode::Char('r'));
        let game = app.game().unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(app.focus(), Focus::Board);
    }

    #[test]
    fn test_draw_message() {
        let mut app = started("3");
        tap_all(
            &mut app,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(app.status_message(), "It's a Draw!");
        assert_eq!(app.game().unwrap().status(), GameStatus::Draw);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new("3");
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}
