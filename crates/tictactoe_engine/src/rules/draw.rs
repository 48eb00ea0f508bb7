//! Draw detection logic.

use super::win::winner;
use crate::{Board, Square};
use tracing::instrument;

/// Returns true if at least one square is empty.
#[instrument(skip(board), fields(size = board.size()))]
pub fn has_empty_cell(board: &Board) -> bool {
    board.squares().contains(&Square::Empty)
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    !has_empty_cell(board)
}

/// A full board with no completed line.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
