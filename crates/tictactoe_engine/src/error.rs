//! Engine error types.

/// Errors surfaced across the engine boundary.
///
/// Occupied squares and moves after the game ended are not errors; they
/// produce [`MoveOutcome::Ignored`](crate::MoveOutcome::Ignored).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Board size that is not positive, or whose cell count overflows.
    #[display("Invalid board size {size}: must be a positive number")]
    InvalidSize {
        /// The rejected size.
        size: i64,
    },

    /// Text that does not parse as a number or coordinate.
    #[display("Could not parse {input:?}")]
    InvalidInput {
        /// The rejected text.
        input: String,
    },

    /// Coordinate outside the board.
    #[display("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// A serialized board whose rows are not all `size` cells long.
    #[display("Row {row} has {len} cells, expected {size}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Cells found in that row.
        len: usize,
        /// Expected row length.
        size: usize,
    },
}

impl std::error::Error for EngineError {}
