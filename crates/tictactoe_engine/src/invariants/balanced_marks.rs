//! Balanced marks invariant: Player One is never behind, never two ahead.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Player One has as many marks as Player Two, or exactly one more.
///
/// Player One always moves first and turns alternate.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let ones = state.board().count(Player::One);
        let twos = state.board().count(Player::Two);
        ones == twos || ones == twos + 1
    }

    fn description() -> &'static str {
        "Player 1 has the same number of marks as Player 2, or one more"
    }
}
