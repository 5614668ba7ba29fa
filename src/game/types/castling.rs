//! Castling sides and rights.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Player;

/// The two castling directions.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Toward the h-file rook; the king lands on the g-file.
    Kingside,
    /// Toward the a-file rook; the king lands on the c-file.
    Queenside,
}

impl CastleSide {
    /// Both sides in index order (Kingside=0, Queenside=1)
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            CastleSide::Kingside => 0,
            CastleSide::Queenside => 1,
        }
    }
}

const WHITE_KINGSIDE: u8 = 1 << 0;
const WHITE_QUEENSIDE: u8 = 1 << 1;
const BLACK_KINGSIDE: u8 = 1 << 2;
const BLACK_QUEENSIDE: u8 = 1 << 3;

const ALL_RIGHTS: u8 = WHITE_KINGSIDE | WHITE_QUEENSIDE | BLACK_KINGSIDE | BLACK_QUEENSIDE;

/// Castling rights for both players, packed as a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both players may castle on either side)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_RIGHTS)
    }

    /// Check if a player still has the right to castle on a side
    #[inline]
    #[must_use]
    pub const fn has(self, player: Player, side: CastleSide) -> bool {
        self.0 & Self::bit_for(player, side) != 0
    }

    /// Grant a castling right
    #[inline]
    pub(crate) fn grant(&mut self, player: Player, side: CastleSide) {
        self.0 |= Self::bit_for(player, side);
    }

    /// Revoke a castling right
    #[inline]
    pub(crate) fn revoke(&mut self, player: Player, side: CastleSide) {
        self.0 &= !Self::bit_for(player, side);
    }

    #[inline]
    const fn bit_for(player: Player, side: CastleSide) -> u8 {
        match (player, side) {
            (Player::White, CastleSide::Kingside) => WHITE_KINGSIDE,
            (Player::White, CastleSide::Queenside) => WHITE_QUEENSIDE,
            (Player::Black, CastleSide::Kingside) => BLACK_KINGSIDE,
            (Player::Black, CastleSide::Queenside) => BLACK_QUEENSIDE,
        }
    }
}
