//! Error types for game operations.

use std::fmt;

use super::types::Move;

/// Error constructing or parsing a board coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPosition {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic square notation
    InvalidNotation { notation: String },
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPosition::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            InvalidPosition::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            InvalidPosition::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for InvalidPosition {}

/// Error returned when `make_move` rejects a move.
///
/// The game state is left untouched when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMoveError {
    /// The rejected move
    pub attempted: Move,
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Illegal move '{}'", self.attempted)
    }
}

impl std::error::Error for IllegalMoveError {}
