//! Sliding move generation for bishops, rooks, and queens.

use super::super::{GameState, Move, MoveKind, Position};

impl GameState {
    /// Walk each direction, collecting empty squares and the first enemy.
    pub(crate) fn sliding_moves(
        &self,
        from: Position,
        directions: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, dc) in directions {
            let mut to = from;
            while let Some(next) = to.offset(dr, dc) {
                to = next;
                match self.board.get(to) {
                    None => moves.push(Move::new(from, to, MoveKind::Normal)),
                    Some(piece) => {
                        if piece.player != self.current_player {
                            moves.push(Move::new(from, to, MoveKind::Normal));
                        }
                        break;
                    }
                }
            }
        }
    }
}
