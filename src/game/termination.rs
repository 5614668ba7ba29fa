//! Game termination: checkmate, stalemate, and draw detection.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{PieceKind, Player};
use super::GameState;

/// Why a game ended.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndReason {
    Checkmate,
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndReason::Checkmate => write!(f, "checkmate"),
            EndReason::Stalemate => write!(f, "stalemate"),
            EndReason::FiftyMoveRule => write!(f, "fifty-move rule"),
            EndReason::ThreefoldRepetition => write!(f, "threefold repetition"),
            EndReason::InsufficientMaterial => write!(f, "insufficient material"),
        }
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Outcome {
    /// The winning player, or `None` for a draw
    pub winner: Option<Player>,
    /// Why the game ended
    pub reason: EndReason,
}

impl Outcome {
    /// Check whether the game was drawn
    #[inline]
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        self.winner.is_none()
    }

    const fn draw(reason: EndReason) -> Self {
        Outcome {
            winner: None,
            reason,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(winner) => write!(f, "{} wins by {}", winner, self.reason),
            None => write!(f, "draw by {}", self.reason),
        }
    }
}

impl GameState {
    /// Check whether the player on turn is checkmated
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Check whether the player on turn has no legal move while not in check
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.legal_moves().is_empty()
    }

    /// Check whether the game has ended
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// The result of the game, or `None` while it is still in progress.
    ///
    /// Mate and stalemate are decided before the draw rules, so a mating
    /// move on the hundredth half-move ends the game by checkmate rather
    /// than by the fifty-move rule.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.legal_moves().is_empty() {
            let outcome = if self.is_in_check() {
                Outcome {
                    winner: Some(self.current_player.opponent()),
                    reason: EndReason::Checkmate,
                }
            } else {
                Outcome::draw(EndReason::Stalemate)
            };
            return Some(outcome);
        }
        if self.halfmove_clock >= 100 {
            return Some(Outcome::draw(EndReason::FiftyMoveRule));
        }
        if self.repetition_counts.get(self.hash) >= 3 {
            return Some(Outcome::draw(EndReason::ThreefoldRepetition));
        }
        if self.is_insufficient_material() {
            return Some(Outcome::draw(EndReason::InsufficientMaterial));
        }
        None
    }

    /// Neither player retains enough material to ever deliver mate.
    ///
    /// True for bare kings, a lone minor piece, and two bishops confined to
    /// squares of one color. Any pawn, rook, or queen is enough to play on.
    fn is_insufficient_material(&self) -> bool {
        let mut knights = 0u32;
        let mut bishops = 0u32;
        let mut bishop_on_light = false;
        let mut bishop_on_dark = false;

        for player in Player::BOTH {
            for (pos, piece) in self.board.pieces(player) {
                match piece.kind {
                    PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
                    PieceKind::Knight => knights += 1,
                    PieceKind::Bishop => {
                        bishops += 1;
                        if (pos.row() + pos.col()) % 2 == 0 {
                            bishop_on_dark = true;
                        } else {
                            bishop_on_light = true;
                        }
                    }
                    PieceKind::King => {}
                }
            }
        }

        if knights + bishops <= 1 {
            return true;
        }
        if knights == 0 && bishops == 2 {
            return !(bishop_on_light && bishop_on_dark);
        }
        false
    }
}
