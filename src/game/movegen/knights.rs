//! Knight move generation.

use super::super::attacks::KNIGHT_ATTACKS;
use super::super::{GameState, Move, MoveKind, Position};

impl GameState {
    pub(crate) fn knight_moves(&self, from: Position, moves: &mut Vec<Move>) {
        for &to in &KNIGHT_ATTACKS[from.index()] {
            let blocked = self
                .board
                .get(to)
                .is_some_and(|piece| piece.player == self.current_player);
            if !blocked {
                moves.push(Move::new(from, to, MoveKind::Normal));
            }
        }
    }
}
