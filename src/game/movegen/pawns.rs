//! Pawn move generation: pushes, captures, en passant, and promotion.

use super::super::{GameState, Move, MoveKind, Position, PROMOTION_KINDS};

impl GameState {
    pub(crate) fn pawn_moves(&self, from: Position, moves: &mut Vec<Move>) {
        let player = self.current_player;
        let dir = player.pawn_direction();

        if let Some(forward) = from.offset(dir, 0) {
            if self.board.is_empty(forward) {
                if forward.row() == player.pawn_promotion_row() {
                    push_promotions(from, forward, moves);
                } else {
                    moves.push(Move::new(from, forward, MoveKind::Normal));
                    if from.row() == player.pawn_start_row() {
                        if let Some(double) = forward.offset(dir, 0) {
                            if self.board.is_empty(double) {
                                moves.push(Move::new(from, double, MoveKind::DoublePawnPush));
                            }
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            if let Some(occupant) = self.board.get(target) {
                if occupant.player != player {
                    if target.row() == player.pawn_promotion_row() {
                        push_promotions(from, target, moves);
                    } else {
                        moves.push(Move::new(from, target, MoveKind::Normal));
                    }
                }
            } else if self.en_passant_target == Some(target) {
                moves.push(Move::new(from, target, MoveKind::EnPassant));
            }
        }
    }
}

/// Push one candidate per promotion choice, queen first.
fn push_promotions(from: Position, to: Position, moves: &mut Vec<Move>) {
    for kind in PROMOTION_KINDS {
        moves.push(Move::new(from, to, MoveKind::Promotion(kind)));
    }
}
