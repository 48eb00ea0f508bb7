//! Win detection logic.
//!
//! A player wins by owning every square of a full row, a full column, the
//! main diagonal or the anti-diagonal. There are no partial k-in-a-row wins.

use crate::{Board, Player, Position, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Returns true if `player` owns a complete line on the board.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    any_row(board, mark)
        || any_column(board, mark)
        || main_diagonal(board, mark)
        || anti_diagonal(board, mark)
}

/// Returns the first player owning a complete line, if any.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| check_win(board, *player))
}

fn owns(board: &Board, row: usize, col: usize, mark: Square) -> bool {
    board.get(Position::new(row, col)) == Some(mark)
}

fn any_row(board: &Board, mark: Square) -> bool {
    let n = board.size();
    (0..n).any(|row| (0..n).all(|col| owns(board, row, col, mark)))
}

fn any_column(board: &Board, mark: Square) -> bool {
    let n = board.size();
    (0..n).any(|col| (0..n).all(|row| owns(board, row, col, mark)))
}

// Top-left to bottom-right.
fn main_diagonal(board: &Board, mark: Square) -> bool {
    (0..board.size()).all(|i| owns(board, i, i, mark))
}

// Top-right to bottom-left.
fn anti_diagonal(board: &Board, mark: Square) -> bool {
    let n = board.size();
    (0..n).all(|i| owns(board, i, n - 1 - i, mark))
}
