//! Move outcomes reported to the presentation layer.

use crate::{GameState, Player};
use serde::{Deserialize, Serialize};

/// What a move did, so the caller knows what to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// Mark placed, game continues with the other player.
    #[display("Continued")]
    Continued,
    /// Mark placed and it completed a line.
    #[display("Won by {_0}")]
    Won(Player),
    /// Mark placed and filled the board without a line.
    #[display("Draw")]
    Draw,
    /// Nothing changed: square occupied or game already over.
    #[display("Ignored")]
    Ignored,
}

impl MoveOutcome {
    /// Returns true if this move ended the game.
    pub fn is_terminal(self) -> bool {
        matches!(self, MoveOutcome::Won(_) | MoveOutcome::Draw)
    }

    /// Returns true if a mark was placed.
    pub fn placed_mark(self) -> bool {
        !matches!(self, MoveOutcome::Ignored)
    }
}

/// Outcome of a move together with the state it left behind.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult<'a> {
    outcome: MoveOutcome,
    state: &'a GameState,
}

impl<'a> MoveResult<'a> {
    pub(crate) fn new(outcome: MoveOutcome, state: &'a GameState) -> Self {
        Self { outcome, state }
    }

    /// The outcome tag.
    pub fn outcome(&self) -> MoveOutcome {
        self.outcome
    }

    /// The game state after the move.
    pub fn state(&self) -> &'a GameState {
        self.state
    }
}
