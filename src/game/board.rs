//! Board placement and square-level queries.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attacks::{
    DIAGONAL_DIRECTIONS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, STRAIGHT_DIRECTIONS,
};
use super::types::{CastleSide, Move, MoveKind, Piece, PieceKind, Player, Position};

/// Piece placement for an 8x8 chess board.
///
/// `Board` records which piece stands on which square and nothing else.
/// Whose turn it is, castling availability, and the rest of the bookkeeping
/// a game needs live on [`GameState`](super::GameState).
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create an empty board
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Create a board with the standard starting placement
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Board::empty();
        let back_row = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back_row.iter().enumerate() {
            board.set(Position::at(0, col), Some(Piece::new(Player::White, kind)));
            board.set(
                Position::at(1, col),
                Some(Piece::new(Player::White, PieceKind::Pawn)),
            );
            board.set(
                Position::at(6, col),
                Some(Piece::new(Player::Black, PieceKind::Pawn)),
            );
            board.set(Position::at(7, col), Some(Piece::new(Player::Black, kind)));
        }
        board
    }

    /// Get the piece on a square
    #[inline]
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row()][pos.col()]
    }

    /// Place or clear a piece on a square
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row()][pos.col()] = piece;
    }

    /// Check whether a square is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Find the first square holding the given player's piece of a kind,
    /// scanning from a1 toward h8.
    #[must_use]
    pub fn find_piece(&self, player: Player, kind: PieceKind) -> Option<Position> {
        let wanted = Piece::new(player, kind);
        for row in 0..8 {
            for col in 0..8 {
                let pos = Position::at(row, col);
                if self.get(pos) == Some(wanted) {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Locate a player's king. The board must contain one.
    pub(crate) fn king_position(&self, player: Player) -> Position {
        self.find_piece(player, PieceKind::King)
            .expect("board has no king")
    }

    /// Iterate over a player's pieces with their squares.
    pub(crate) fn pieces(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                let pos = Position::at(row, col);
                self.get(pos)
                    .filter(|piece| piece.player == player)
                    .map(|piece| (pos, piece))
            })
        })
    }

    /// Check whether any piece of `by` attacks the target square.
    ///
    /// Works outward from the target: pawn and knight and king sources come
    /// from the precomputed tables, slider sources from walking each ray to
    /// the first occupied square.
    #[must_use]
    pub fn is_square_attacked(&self, target: Position, by: Player) -> bool {
        // A pawn of `by` attacks `target` from the squares a pawn of the
        // other player would attack when standing on `target`.
        for &from in &PAWN_ATTACKS[by.opponent().index()][target.index()] {
            if self.get(from) == Some(Piece::new(by, PieceKind::Pawn)) {
                return true;
            }
        }

        for &from in &KNIGHT_ATTACKS[target.index()] {
            if self.get(from) == Some(Piece::new(by, PieceKind::Knight)) {
                return true;
            }
        }

        for &from in &KING_ATTACKS[target.index()] {
            if self.get(from) == Some(Piece::new(by, PieceKind::King)) {
                return true;
            }
        }

        for &(dr, dc) in &STRAIGHT_DIRECTIONS {
            if let Some(piece) = self.first_piece_along(target, dr, dc) {
                if piece.player == by && piece.kind.attacks_straight() {
                    return true;
                }
            }
        }

        for &(dr, dc) in &DIAGONAL_DIRECTIONS {
            if let Some(piece) = self.first_piece_along(target, dr, dc) {
                if piece.player == by && piece.kind.attacks_diagonally() {
                    return true;
                }
            }
        }

        false
    }

    fn first_piece_along(&self, from: Position, dr: isize, dc: isize) -> Option<Piece> {
        let mut pos = from.offset(dr, dc)?;
        loop {
            if let Some(piece) = self.get(pos) {
                return Some(piece);
            }
            pos = pos.offset(dr, dc)?;
        }
    }

    /// Check whether a player's king is attacked.
    ///
    /// The player must have a king on the board.
    #[must_use]
    pub fn is_in_check(&self, player: Player) -> bool {
        self.is_square_attacked(self.king_position(player), player.opponent())
    }

    /// Apply a move's placement effects, returning the captured piece if any.
    ///
    /// The origin square must hold a piece. Castling relocates the rook as
    /// well; en passant removes the pawn beside the destination.
    pub(crate) fn apply_move(&mut self, mv: Move) -> Option<Piece> {
        let piece = self.get(mv.from()).expect("apply_move 'from' square empty");
        match mv.kind() {
            MoveKind::Normal | MoveKind::DoublePawnPush => {
                let captured = self.get(mv.to());
                self.set(mv.from(), None);
                self.set(mv.to(), Some(piece));
                captured
            }
            MoveKind::EnPassant => {
                // The captured pawn sits on the origin row, destination column.
                let victim = Position::at(mv.from().row(), mv.to().col());
                let captured = self.get(victim);
                self.set(victim, None);
                self.set(mv.from(), None);
                self.set(mv.to(), Some(piece));
                captured
            }
            MoveKind::Castle(side) => {
                let row = mv.from().row();
                let (rook_from, rook_to) = match side {
                    CastleSide::Kingside => (Position::at(row, 7), Position::at(row, 5)),
                    CastleSide::Queenside => (Position::at(row, 0), Position::at(row, 3)),
                };
                let rook = self.get(rook_from).expect("castling without rook");
                self.set(mv.from(), None);
                self.set(mv.to(), Some(piece));
                self.set(rook_from, None);
                self.set(rook_to, Some(rook));
                None
            }
            MoveKind::Promotion(kind) => {
                let captured = self.get(mv.to());
                self.set(mv.from(), None);
                self.set(mv.to(), Some(Piece::new(piece.player, kind)));
                captured
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Debug for Board {
    /// Render the board as text, row 8 at the top.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some(piece) => write!(f, "{} ", piece.to_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
