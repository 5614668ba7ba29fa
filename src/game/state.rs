//! Game state and move application.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::zobrist::ZOBRIST;

use super::types::{CastleSide, CastlingRights, Move, Piece, PieceKind, Player, Position};
use super::{Board, IllegalMoveError};

/// Occurrence counts of position hashes, for threefold repetition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn increment(&mut self, hash: u64) {
        *self.counts.entry(hash).or_insert(0) += 1;
    }
}

/// A chess game in progress.
///
/// Owns the board placement plus the bookkeeping the rules need: whose turn
/// it is, castling availability, the en passant target, the half-move clock,
/// and the repetition history. All mutation goes through [`make_move`];
/// restarting means constructing a fresh `GameState`.
///
/// # Example
/// ```
/// use chess_rules::GameState;
///
/// let mut state = GameState::initial();
/// let opening = state.legal_moves();
/// assert_eq!(opening.len(), 20);
/// state.make_move(opening[0])?;
/// # Ok::<(), chess_rules::IllegalMoveError>(())
/// ```
///
/// [`make_move`]: GameState::make_move
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Position>,
    pub(crate) halfmove_clock: u32,
    pub(crate) hash: u64,
    pub(crate) repetition_counts: RepetitionTable,
}

impl GameState {
    /// Start a game from a player to move and a board placement.
    ///
    /// Castling rights are inferred from the placement: a right is granted
    /// only where the king and the matching rook stand on their home
    /// squares. Use [`GameBuilder`](super::GameBuilder) to control rights,
    /// the en passant target, or the half-move clock explicitly.
    #[must_use]
    pub fn new(player: Player, board: Board) -> Self {
        let castling_rights = infer_castling_rights(&board);
        let mut state = GameState {
            board,
            current_player: player,
            castling_rights,
            en_passant_target: None,
            halfmove_clock: 0,
            hash: 0,
            repetition_counts: RepetitionTable::new(),
        };
        state.hash = state.position_hash();
        state.repetition_counts.increment(state.hash);
        state
    }

    /// Start a game from the standard initial position, White to move.
    #[must_use]
    pub fn initial() -> Self {
        GameState::new(Player::White, Board::initial())
    }

    /// The player whose turn it is
    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.current_player
    }

    /// The board placement
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Castling availability for both players
    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// The square a double pawn push just passed over, if any.
    ///
    /// Set by a double push and cleared by the very next move, so it is
    /// `Some` for exactly one ply.
    #[inline]
    #[must_use]
    pub const fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    /// Half-moves since the last capture or pawn move (fifty-move rule clock)
    #[inline]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Check whether the player on turn is in check
    #[inline]
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.board.is_in_check(self.current_player)
    }

    /// Play a move.
    ///
    /// The move must be one of those returned by [`legal_moves_for_piece`]
    /// for the current position; anything else is rejected with
    /// [`IllegalMoveError`] and the state is left untouched.
    ///
    /// [`legal_moves_for_piece`]: GameState::legal_moves_for_piece
    pub fn make_move(&mut self, mv: Move) -> Result<(), IllegalMoveError> {
        if !self.legal_moves_for_piece(mv.from()).contains(&mv) {
            #[cfg(feature = "logging")]
            log::warn!("rejected illegal move {mv}");
            return Err(IllegalMoveError { attempted: mv });
        }
        self.apply_legal(mv);
        Ok(())
    }

    /// Apply a move known to be legal, updating all bookkeeping.
    pub(crate) fn apply_legal(&mut self, mv: Move) {
        #[cfg(feature = "logging")]
        log::debug!("{} plays {}", self.current_player, mv);

        let piece = self
            .board
            .get(mv.from())
            .expect("applying a move from an empty square");
        let captured = self.board.apply_move(mv);

        self.update_castling_rights(mv, piece, captured);

        self.en_passant_target = if mv.is_double_pawn_push() {
            let row = usize::midpoint(mv.from().row(), mv.to().row());
            Some(Position::at(row, mv.from().col()))
        } else {
            None
        };

        if piece.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.current_player = self.current_player.opponent();
        self.hash = self.position_hash();
        self.repetition_counts.increment(self.hash);
    }

    fn update_castling_rights(&mut self, mv: Move, piece: Piece, captured: Option<Piece>) {
        match piece.kind {
            PieceKind::King => {
                self.castling_rights.revoke(piece.player, CastleSide::Kingside);
                self.castling_rights.revoke(piece.player, CastleSide::Queenside);
            }
            PieceKind::Rook => {
                let row = piece.player.back_row();
                if mv.from() == Position::at(row, 0) {
                    self.castling_rights.revoke(piece.player, CastleSide::Queenside);
                } else if mv.from() == Position::at(row, 7) {
                    self.castling_rights.revoke(piece.player, CastleSide::Kingside);
                }
            }
            _ => {}
        }

        // A rook captured on its home corner takes its right with it.
        if let Some(captured) = captured {
            if captured.kind == PieceKind::Rook {
                let row = captured.player.back_row();
                if mv.to() == Position::at(row, 0) {
                    self.castling_rights.revoke(captured.player, CastleSide::Queenside);
                } else if mv.to() == Position::at(row, 7) {
                    self.castling_rights.revoke(captured.player, CastleSide::Kingside);
                }
            }
        }
    }

    /// Recompute the position hash from scratch.
    ///
    /// Covers placement, side to move, castling rights, and the en passant
    /// column.
    pub(crate) fn position_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for player in Player::BOTH {
            for (pos, piece) in self.board.pieces(player) {
                hash ^= ZOBRIST.piece_keys[piece.kind.index()][player.index()][pos.index()];
            }
        }

        if self.current_player == Player::Black {
            hash ^= ZOBRIST.black_to_move_key;
        }

        for player in Player::BOTH {
            for side in CastleSide::BOTH {
                if self.castling_rights.has(player, side) {
                    hash ^= ZOBRIST.castling_keys[player.index()][side.index()];
                }
            }
        }

        if let Some(target) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant_keys[target.col()];
        }

        hash
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::initial()
    }
}

fn infer_castling_rights(board: &Board) -> CastlingRights {
    let mut rights = CastlingRights::none();
    for player in Player::BOTH {
        let row = player.back_row();
        if board.get(Position::at(row, 4)) != Some(Piece::new(player, PieceKind::King)) {
            continue;
        }
        if board.get(Position::at(row, 7)) == Some(Piece::new(player, PieceKind::Rook)) {
            rights.grant(player, CastleSide::Kingside);
        }
        if board.get(Position::at(row, 0)) == Some(Piece::new(player, PieceKind::Rook)) {
            rights.grant(player, CastleSide::Queenside);
        }
    }
    rights
}
