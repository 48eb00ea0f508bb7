//! Game engine: move application and turn management.

use crate::contracts::{Contract, MoveContract};
use crate::rules::{check_win, has_empty_cell};
use crate::{BoardSize, EngineError, GameState, GameStatus, MoveOutcome, MoveResult, Position};
use tracing::{debug, info, instrument};

/// N×N tic-tac-toe engine.
///
/// Owns the single [`GameState`] of a session. The state changes only through
/// [`apply_move`](Self::apply_move) and [`restart`](Self::restart); changing
/// the board size means building a new engine with
/// [`configure`](Self::configure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Starts a game on a fresh `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] when `size` is zero or negative.
    #[instrument]
    pub fn configure(size: i64) -> Result<Self, EngineError> {
        let size = BoardSize::new(size)?;
        Ok(Self::with_size(size))
    }

    /// Starts a game on a board of an already validated size.
    #[instrument]
    pub fn with_size(size: BoardSize) -> Self {
        info!(%size, "Configured new game");
        Self {
            state: GameState::new(size),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Side length of the board in play.
    pub fn size(&self) -> BoardSize {
        self.state.board().board_size()
    }

    /// Resets to a fresh board of the same size, Player One to move.
    #[instrument(skip(self), fields(size = %self.size()))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.state = GameState::new(self.size());
    }

    /// Places the current player's mark at (`row`, `col`).
    ///
    /// See [`apply`](Self::apply).
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveResult<'_>, EngineError> {
        self.apply(Position::new(row, col))
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Moves on an occupied square or after the game ended leave the state
    /// untouched and report [`MoveOutcome::Ignored`]. Otherwise the mover's
    /// lines are checked first, then the board is checked for a draw, and
    /// only a continuing game passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] for coordinates off the board.
    #[instrument(skip(self), fields(position = %pos, player = %self.state.current_player()))]
    pub fn apply(&mut self, pos: Position) -> Result<MoveResult<'_>, EngineError> {
        self.state.board().index(pos)?;

        if let Err(reason) = MoveContract::pre(&self.state, &pos) {
            debug!(%reason, "Move ignored");
            return Ok(MoveResult::new(MoveOutcome::Ignored, &self.state));
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let mover = self.state.current_player();
        self.state.place(pos, mover)?;

        let outcome = if check_win(self.state.board(), mover) {
            self.state.set_status(GameStatus::Won(mover));
            MoveOutcome::Won(mover)
        } else if !has_empty_cell(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
            MoveOutcome::Draw
        } else {
            self.state.pass_turn();
            MoveOutcome::Continued
        };

        #[cfg(debug_assertions)]
        crate::contracts::assert_move_contract(&before, &self.state);

        if outcome.is_terminal() {
            info!(%outcome, "Game over");
        } else {
            debug!(next = %self.state.current_player(), "Move applied");
        }

        Ok(MoveResult::new(outcome, &self.state))
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_size(BoardSize::default())
    }
}
