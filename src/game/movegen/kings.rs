//! King move generation, including castling.

use super::super::attacks::KING_ATTACKS;
use super::super::{CastleSide, GameState, Move, MoveKind, Piece, PieceKind, Position};

impl GameState {
    pub(crate) fn king_moves(&self, from: Position, moves: &mut Vec<Move>) {
        let player = self.current_player;

        for &to in &KING_ATTACKS[from.index()] {
            let blocked = self
                .board
                .get(to)
                .is_some_and(|piece| piece.player == player);
            if !blocked {
                moves.push(Move::new(from, to, MoveKind::Normal));
            }
        }

        // Castling candidates require the king on its home square, an
        // unrevoked right, the path empty, the rook on its corner, and no
        // attacked square among the king's current, crossed, and landing
        // squares. The landing square is rechecked by the legality filter.
        let row = player.back_row();
        if from != Position::at(row, 4) {
            return;
        }
        let kingside = self.castling_rights.has(player, CastleSide::Kingside);
        let queenside = self.castling_rights.has(player, CastleSide::Queenside);
        if (!kingside && !queenside) || self.board.is_in_check(player) {
            return;
        }

        if kingside
            && self.board.is_empty(Position::at(row, 5))
            && self.board.is_empty(Position::at(row, 6))
            && self.board.get(Position::at(row, 7)) == Some(Piece::new(player, PieceKind::Rook))
            && self.castle_path_safe(row, [5, 6])
        {
            moves.push(Move::new(
                from,
                Position::at(row, 6),
                MoveKind::Castle(CastleSide::Kingside),
            ));
        }

        if queenside
            && self.board.is_empty(Position::at(row, 1))
            && self.board.is_empty(Position::at(row, 2))
            && self.board.is_empty(Position::at(row, 3))
            && self.board.get(Position::at(row, 0)) == Some(Piece::new(player, PieceKind::Rook))
            && self.castle_path_safe(row, [3, 2])
        {
            moves.push(Move::new(
                from,
                Position::at(row, 2),
                MoveKind::Castle(CastleSide::Queenside),
            ));
        }
    }

    fn castle_path_safe(&self, row: usize, cols: [usize; 2]) -> bool {
        let opponent = self.current_player.opponent();
        cols.iter()
            .all(|&col| !self.board.is_square_attacked(Position::at(row, col), opponent))
    }
}
