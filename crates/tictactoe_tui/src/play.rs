//! Headless play: applies a scripted move list and prints what happened.

use anyhow::{Context, Result};
use std::io::Write;
use tictactoe_engine::{BoardSize, GameEngine, GameStatus, Position};
use tracing::{info, instrument};

/// Plays `moves` on a fresh board, writing one line per move and then the
/// final board and status line to `out`.
///
/// Moves after the game ended are reported as ignored, like taps on a
/// finished board. Coordinates off the board are an error.
#[instrument(skip(moves, out), fields(moves = moves.len()))]
pub fn run_play(size: BoardSize, moves: &[Position], out: &mut impl Write) -> Result<GameStatus> {
    let mut engine = GameEngine::with_size(size);

    for (turn, &pos) in moves.iter().enumerate() {
        let player = engine.state().current_player();
        let result = engine
            .apply(pos)
            .with_context(|| format!("Move {} at {} rejected", turn + 1, pos))?;
        writeln!(out, "{:>3}. {} {} -> {}", turn + 1, player, pos, result.outcome())?;
    }

    let state = engine.state();
    writeln!(out)?;
    writeln!(out, "{}", state.board())?;
    writeln!(out)?;
    writeln!(out, "{}", state.status_line())?;

    info!(status = ?state.status(), "Scripted game finished");
    Ok(state.status())
}
