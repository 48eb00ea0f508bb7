//! N×N tic-tac-toe rules engine.
//!
//! Pure game logic with no rendering: the presentation layer configures a
//! board size, forwards cell taps to [`GameEngine::apply_move`], and redraws
//! from the returned [`MoveResult`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveOutcome, Player};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::configure(3)?;
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     engine.apply_move(row, col)?;
//! }
//! let result = engine.apply_move(0, 2)?;
//! assert_eq!(result.outcome(), MoveOutcome::Won(Player::One));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod outcome;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use engine::GameEngine;
pub use error::EngineError;
pub use outcome::{MoveOutcome, MoveResult};
pub use position::{BoardSize, Position};
pub use types::{Board, GameState, GameStatus, Player, Square};
