//! Board coordinate type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game::error::InvalidPosition;

/// A square on the chess board, addressed as (row, column).
///
/// Row 0 is White's back rank and column 0 is the a-file, so `(0, 4)` is e1.
/// A `Position` that exists is always in range; out-of-range coordinates are
/// rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Create a new position with bounds checking.
    pub const fn new(row: usize, col: usize) -> Result<Self, InvalidPosition> {
        if row >= 8 {
            return Err(InvalidPosition::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(InvalidPosition::ColOutOfBounds { col });
        }
        Ok(Position { row, col })
    }

    /// Construct from coordinates already known to be in range.
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < 8 && col < 8);
        Position { row, col }
    }

    /// Get the row (0-7, where 0 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Get the position's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self.row * 8 + self.col
    }

    /// Step by a (row, column) delta, returning `None` when leaving the board.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Position {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col as u8 + b'a') as char, self.row + 1)
    }
}

impl FromStr for Position {
    type Err = InvalidPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(InvalidPosition::InvalidNotation {
                notation: s.to_string(),
            });
        }

        let col = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => {
                return Err(InvalidPosition::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        let row = match chars[1] {
            '1'..='8' => chars[1] as usize - '1' as usize,
            _ => {
                return Err(InvalidPosition::InvalidNotation {
                    notation: s.to_string(),
                })
            }
        };

        Ok(Position { row, col })
    }
}
