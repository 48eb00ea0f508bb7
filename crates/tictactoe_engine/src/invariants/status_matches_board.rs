//! Status invariant: the recorded status agrees with the board.

use super::Invariant;
use crate::rules::{check_win, has_empty_cell, is_draw, winner};
use crate::{GameState, GameStatus};

/// Invariant: status is consistent with the lines on the board.
///
/// - `InProgress`: no completed line and at least one empty square
/// - `Won(p)`: `p` owns a completed line
/// - `Draw`: full board, no completed line
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameState> for StatusMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::InProgress => winner(board).is_none() && has_empty_cell(board),
            GameStatus::Won(player) => check_win(board, player),
            GameStatus::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game status matches the lines on the board"
    }
}
