//! Tests for the game engine lifecycle and rules.

use tictactoe_engine::{
    EngineError, GameEngine, GameStatus, MoveOutcome, Player, Position, Square,
};

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|&(row, col)| engine.apply_move(row, col).expect("in bounds").outcome())
        .collect()
}

#[test]
fn test_fresh_game() {
    for size in [1, 2, 3, 7] {
        let engine = GameEngine::configure(size).unwrap();
        let state = engine.state();
        assert_eq!(state.board().squares().len(), (size * size) as usize);
        assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_player(), Player::One);
    }
}

#[test]
fn test_invalid_sizes_rejected() {
    for size in [0, -1, -100] {
        let err = GameEngine::configure(size).unwrap_err();
        assert!(matches!(err, EngineError::InvalidSize { .. }));
        assert!(err.to_string().contains("Invalid board size"));
    }
}

#[test]
fn test_large_board_configures() {
    let mut engine = GameEngine::configure(256).unwrap();
    assert_eq!(engine.state().board().squares().len(), 256 * 256);

    let result = engine.apply_move(255, 255).unwrap();
    assert_eq!(result.outcome(), MoveOutcome::Continued);
    assert_eq!(result.state().current_player(), Player::Two);
}

#[test]
fn test_occupied_square_ignored() {
    let mut engine = GameEngine::configure(3).unwrap();
    engine.apply_move(1, 1).unwrap();
    let before = engine.state().clone();

    let result = engine.apply_move(1, 1).unwrap();
    assert_eq!(result.outcome(), MoveOutcome::Ignored);
    assert_eq!(result.state(), &before);
    assert_eq!(engine.state().current_player(), Player::Two);
}

#[test]
fn test_row_win_for_player_one() {
    let mut engine = GameEngine::configure(3).unwrap();
    let outcomes = play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(
        outcomes,
        vec![
            MoveOutcome::Continued,
            MoveOutcome::Continued,
            MoveOutcome::Continued,
            MoveOutcome::Continued,
            MoveOutcome::Won(Player::One),
        ]
    );
    assert_eq!(engine.state().status(), GameStatus::Won(Player::One));
}

#[test]
fn test_sequence_win_then_locked() {
    let mut engine = GameEngine::configure(3).unwrap();
    let outcomes = play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Player::One)));

    // The winner keeps the turn.
    assert_eq!(engine.state().current_player(), Player::One);

    let finished = engine.state().clone();
    for (row, col) in [(2, 2), (1, 2), (2, 0)] {
        let result = engine.apply_move(row, col).unwrap();
        assert_eq!(result.outcome(), MoveOutcome::Ignored);
    }
    assert_eq!(engine.state(), &finished);
}

#[test]
fn test_player_two_can_win() {
    let mut engine = GameEngine::configure(3).unwrap();
    let outcomes = play(&mut engine, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 0)]);
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Player::Two)));
    assert_eq!(engine.state().current_player(), Player::Two);
    assert_eq!(engine.state().status_line(), "Player 2 Wins!");
}

#[test]
fn test_full_board_draw() {
    // X O X
    // X O O
    // O X X
    let mut engine = GameEngine::configure(3).unwrap();
    let outcomes = play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
    );

    assert_eq!(outcomes.last(), Some(&MoveOutcome::Draw));
    assert_eq!(engine.state().status(), GameStatus::Draw);
    // The turn is not passed on the final move.
    assert_eq!(engine.state().current_player(), Player::One);

    let drawn = engine.state().clone();
    assert_eq!(engine.apply_move(0, 0).unwrap().outcome(), MoveOutcome::Ignored);
    assert_eq!(engine.state(), &drawn);
}

#[test]
fn test_win_on_last_square_beats_draw() {
    // X O X
    // O X O
    // O X X  <- last move (2, 2) fills the board and completes the diagonal
    let mut engine = GameEngine::configure(3).unwrap();
    let outcomes = play(
        &mut engine,
        &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
    );
    assert_eq!(outcomes.last(), Some(&MoveOutcome::Won(Player::One)));
    assert_eq!(engine.state().status(), GameStatus::Won(Player::One));
}

#[test]
fn test_out_of_bounds_is_an_error() {
    let mut engine = GameEngine::configure(4).unwrap();
    let err = engine.apply(Position::new(0, 4)).unwrap_err();
    assert_eq!(
        err,
        EngineError::OutOfBounds {
            row: 0,
            col: 4,
            size: 4
        }
    );
}

#[test]
fn test_out_of_bounds_checked_after_game_over() {
    let mut engine = GameEngine::configure(1).unwrap();
    engine.apply_move(0, 0).unwrap();
    assert!(engine.apply_move(1, 1).is_err());
}

#[test]
fn test_resize_discards_state() {
    let mut engine = GameEngine::configure(3).unwrap();
    engine.apply_move(0, 0).unwrap();

    engine = GameEngine::configure(4).unwrap();
    assert_eq!(engine.size().get(), 4);
    assert!(engine.state().board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(engine.state().current_player(), Player::One);
}

#[test]
fn test_state_snapshot_round_trip() {
    let mut engine = GameEngine::configure(3).unwrap();
    play(&mut engine, &[(0, 0), (2, 2)]);

    let json = serde_json::to_string(engine.state()).unwrap();
    let restored: tictactoe_engine::GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, engine.state());
}
