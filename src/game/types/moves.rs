//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::PieceKind;
use super::position::Position;

/// How a move alters the board beyond relocating the moved piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// A plain move or capture.
    Normal,
    /// A pawn's initial two-square advance.
    DoublePawnPush,
    /// An en passant capture; the captured pawn stands beside the destination.
    EnPassant,
    /// Castling, recorded as the king's from and to squares.
    Castle(CastleSide),
    /// A pawn reaching the last row, replaced by a piece of the given kind.
    Promotion(PieceKind),
}

/// A single chess move.
///
/// Moves are handed out by the move generator; play one by passing it back
/// to [`GameState::make_move`](crate::game::GameState::make_move).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Position,
    to: Position,
    kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub(crate) const fn new(from: Position, to: Position, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Square the piece moves from
    #[inline]
    #[must_use]
    pub const fn from(self) -> Position {
        self.from
    }

    /// Square the piece moves to
    #[inline]
    #[must_use]
    pub const fn to(self) -> Position {
        self.to
    }

    /// What kind of move this is
    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// The piece kind a promotion delivers, if this move promotes
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }

    /// Check if this move is a castle
    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Check if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Check if this move is an en passant capture
    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Check if this move is a double pawn push
    #[inline]
    #[must_use]
    pub const fn is_double_pawn_push(self) -> bool {
        matches!(self.kind, MoveKind::DoublePawnPush)
    }
}

impl fmt::Display for Move {
    /// Format in coordinate notation, e.g. "e2e4" or "e7e8q".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
