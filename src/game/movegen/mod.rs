//! Legal move generation.
//!
//! Generation runs in two phases: per-piece pseudo-legal candidates first,
//! then a legality filter that rejects any candidate leaving the mover's own
//! king attacked. The filter probes a throwaway copy of the board.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{DIAGONAL_DIRECTIONS, QUEEN_DIRECTIONS, STRAIGHT_DIRECTIONS};
use super::{GameState, Move, PieceKind, Position};

impl GameState {
    /// All legal moves for the piece on a square.
    ///
    /// Returns an empty list when the square is empty or holds a piece of
    /// the player not on turn. The list is computed fresh on every call.
    #[must_use]
    pub fn legal_moves_for_piece(&self, pos: Position) -> Vec<Move> {
        let Some(piece) = self.board.get(pos) else {
            return Vec::new();
        };
        if piece.player != self.current_player {
            return Vec::new();
        }
        let mut moves = Vec::new();
        self.pseudo_moves_for(pos, piece.kind, &mut moves);
        moves.retain(|&mv| self.leaves_king_safe(mv));
        moves
    }

    /// All legal moves for the player on turn.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for (pos, piece) in self.board.pieces(self.current_player) {
            self.pseudo_moves_for(pos, piece.kind, &mut moves);
        }
        moves.retain(|&mv| self.leaves_king_safe(mv));
        moves
    }

    fn pseudo_moves_for(&self, from: Position, kind: PieceKind, moves: &mut Vec<Move>) {
        match kind {
            PieceKind::Pawn => self.pawn_moves(from, moves),
            PieceKind::Knight => self.knight_moves(from, moves),
            PieceKind::Bishop => self.sliding_moves(from, &DIAGONAL_DIRECTIONS, moves),
            PieceKind::Rook => self.sliding_moves(from, &STRAIGHT_DIRECTIONS, moves),
            PieceKind::Queen => self.sliding_moves(from, &QUEEN_DIRECTIONS, moves),
            PieceKind::King => self.king_moves(from, moves),
        }
    }

    /// A candidate is legal when the mover's own king is not attacked after
    /// applying it to a copy of the board.
    fn leaves_king_safe(&self, mv: Move) -> bool {
        let mut board = self.board.clone();
        board.apply_move(mv);
        !board.is_in_check(self.current_player)
    }

    /// Count the legal move sequences of the given depth.
    ///
    /// A standard correctness oracle for move generation.
    #[must_use]
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let mut next = self.clone();
            next.apply_legal(mv);
            nodes += next.perft(depth - 1);
        }
        nodes
    }
}
