//! Turn invariant: the player to move follows from the marks on the board.

use super::Invariant;
use crate::{GameState, GameStatus, Player};

/// Invariant: the current player agrees with the mark counts.
///
/// While the game is running, Player One moves when the counts are equal.
/// Once it is over the turn is not passed, so the current player is the
/// one who made the last mark.
pub struct TurnMatchesMarksInvariant;

impl Invariant<GameState> for TurnMatchesMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let ones = state.board().count(Player::One);
        let twos = state.board().count(Player::Two);

        let expected = match state.status() {
            GameStatus::InProgress if ones == twos => Player::One,
            GameStatus::InProgress => Player::Two,
            _ if ones > twos => Player::One,
            _ => Player::Two,
        };

        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Current player matches the marks on the board"
    }
}
