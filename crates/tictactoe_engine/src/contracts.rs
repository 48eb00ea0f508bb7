//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use crate::invariants::{GameInvariants, InvariantSet};
use crate::{GameState, Position, Square};
use tracing::{instrument, warn};

/// Why a contract rejected a transition.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ContractError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for ContractError {}

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), ContractError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractError>;
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Game is still in progress
/// - Target square is empty
///
/// Postconditions:
/// - Exactly one square changed, from empty to occupied
/// - All game invariants hold
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), ContractError> {
        if state.status().is_terminal() {
            return Err(ContractError::GameOver);
        }
        if !state.board().is_empty(*pos) {
            return Err(ContractError::SquareOccupied(*pos));
        }
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ContractError> {
        if !MonotonicBoard::holds(before, after) {
            return Err(ContractError::InvariantViolation(
                "Board squares are monotonic (one new mark per move)".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractError::InvariantViolation(descriptions)
        })
    }
}

/// Transition property: a move adds exactly one mark and overwrites nothing.
pub struct MonotonicBoard;

impl MonotonicBoard {
    /// Compares two consecutive states square by square.
    #[instrument(skip_all)]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let before = before.board().squares();
        let after = after.board().squares();
        if before.len() != after.len() {
            warn!("Board size changed during a move");
            return false;
        }

        let mut placed = 0;
        for (old, new) in before.iter().zip(after) {
            match (old, new) {
                (Square::Empty, Square::Occupied(_)) => placed += 1,
                (old, new) if old == new => {}
                _ => return false,
            }
        }
        placed == 1
    }
}

/// Panics if a move broke its postcondition. Called only in debug builds.
#[instrument(skip_all)]
pub fn assert_move_contract(before: &GameState, after: &GameState) {
    if let Err(e) = MoveContract::post(before, after) {
        panic!("Move contract violated: {e}");
    }
}
