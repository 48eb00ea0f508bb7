//! Board coordinates and board size.

use crate::EngineError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A cell coordinate, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"` (whitespace around either number is allowed).
impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidInput {
            input: s.to_string(),
        };

        let (row, col) = s.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
        let col = col.trim().parse::<usize>().map_err(|_| invalid())?;
        Ok(Self::new(row, col))
    }
}

/// Side length of a square board, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The classic 3x3 board.
    pub const CLASSIC: BoardSize = BoardSize(3);

    /// Validates a requested side length.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSize`] when `size` is zero or negative,
    /// or when the `size * size` cell count does not fit in `usize`.
    #[instrument]
    pub fn new(size: i64) -> Result<Self, EngineError> {
        match usize::try_from(size) {
            Ok(n) if n > 0 && n.checked_mul(n).is_some() => Ok(Self(n)),
            _ => Err(EngineError::InvalidSize { size }),
        }
    }

    /// Parses the text typed into a size field.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidInput`] for non-numeric text,
    /// [`EngineError::InvalidSize`] for numbers out of range.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let size = input
            .trim()
            .parse::<i64>()
            .map_err(|_| EngineError::InvalidInput {
                input: input.to_string(),
            })?;
        Self::new(size)
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Number of cells on a board of this size.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = EngineError;

    fn try_from(size: i64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for i64 {
    fn from(size: BoardSize) -> Self {
        // The side length squared fits in usize, so the side fits in i64.
        i64::try_from(size.0).unwrap_or(i64::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rejects_zero_and_negative() {
        assert!(matches!(
            BoardSize::new(0),
            Err(EngineError::InvalidSize { size: 0, .. })
        ));
        assert!(matches!(
            BoardSize::new(-1),
            Err(EngineError::InvalidSize { size: -1, .. })
        ));
    }

    #[test]
    fn test_large_sizes_accepted() {
        assert_eq!(BoardSize::new(256).unwrap().cells(), 65_536);
        assert_eq!(BoardSize::new(1_000).unwrap().get(), 1_000);
    }

    #[test]
    fn test_size_rejected_when_cell_count_overflows() {
        assert!(matches!(
            BoardSize::new(i64::MAX),
            Err(EngineError::InvalidSize { size: i64::MAX })
        ));
    }

    #[test]
    fn test_parse_size_text() {
        assert_eq!(BoardSize::parse(" 4 ").unwrap().get(), 4);
        assert!(matches!(
            BoardSize::parse("four"),
            Err(EngineError::InvalidInput { .. })
        ));
        assert!(matches!(
            BoardSize::parse("-2"),
            Err(EngineError::InvalidSize { .. })
        ));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("1, 2".parse::<Position>().unwrap(), Position::new(1, 2));
        assert!("1".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
        assert!("-1,0".parse::<Position>().is_err());
    }
}
