//! Core domain types for N×N tic-tac-toe.

use crate::{BoardSize, EngineError, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// First player, plays crosses and always moves first.
    #[display("Player 1")]
    One,
    /// Second player, plays rings.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The glyph drawn for this player's marks.
    pub fn mark(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Square N×N board.
///
/// Serialized as a list of rows; deserialization rejects empty or
/// ragged grids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Square>>", into = "Vec<Vec<Square>>")]
pub struct Board {
    size: BoardSize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cells()],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size.get()
    }

    /// Validated size of the board.
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size() && pos.col < self.size()
    }

    /// Maps a position to its row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] for positions off the board.
    pub fn index(&self, pos: Position) -> Result<usize, EngineError> {
        if self.contains(pos) {
            Ok(pos.row * self.size() + pos.col)
        } else {
            Err(EngineError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size(),
            })
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Option<Square> {
        self.index(pos).ok().map(|i| self.squares[i])
    }

    /// Sets the square at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OutOfBounds`] for positions off the board.
    pub fn set(&mut self, pos: Position, square: Square) -> Result<(), EngineError> {
        let i = self.index(pos)?;
        self.squares[i] = square;
        Ok(())
    }

    /// Checks if a square is empty. Off-board positions are not empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size())
    }

    /// Counts the squares occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

/// Renders the board as an ASCII grid, `.` for empty squares.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.size()].join("+");
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
                writeln!(f, "{separator}")?;
            }
            let cells: Vec<String> = row
                .iter()
                .map(|s| s.player().map_or('.', Player::mark).to_string())
                .collect();
            write!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Square>>> for Board {
    type Error = EngineError;

    fn try_from(rows: Vec<Vec<Square>>) -> Result<Self, Self::Error> {
        let size = BoardSize::new(i64::try_from(rows.len()).unwrap_or(i64::MAX))?;
        let mut squares = Vec::with_capacity(size.cells());
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != size.get() {
                return Err(EngineError::RaggedRow {
                    row,
                    len: cells.len(),
                    size: size.get(),
                });
            }
            squares.extend(cells);
        }
        Ok(Self { size, squares })
    }
}

impl From<Board> for Vec<Vec<Square>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[Square]>::to_vec).collect()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Won and drawn games accept no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(crate) board: Board,
    /// Player to move, or the last mover once the game is over.
    pub(crate) current_player: Player,
    /// Game status.
    pub(crate) status: GameStatus,
}

impl GameState {
    /// Creates a fresh game: empty board, Player One to move.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            board: Board::new(size),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// One-line status for display: whose turn it is, or how the game ended.
    pub fn status_line(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s Turn", self.current_player),
            GameStatus::Won(player) => format!("{player} Wins!"),
            GameStatus::Draw => "It's a Draw!".to_string(),
        }
    }

    /// Marks a square for `player` (unchecked - use GameEngine::apply_move for validation).
    pub(crate) fn place(&mut self, pos: Position, player: Player) -> Result<(), EngineError> {
        self.board.set(pos, Square::Occupied(player))
    }

    /// Hands the turn to the other player.
    pub(crate) fn pass_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Sets the game status.
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}
