//! Fluent builder for constructing game positions.
//!
//! Lets tests and front-ends set up arbitrary positions piece by piece,
//! with explicit control over the bookkeeping [`GameState::new`] infers.
//!
//! # Example
//! ```
//! use chess_rules::{GameBuilder, PieceKind, Player, Position};
//!
//! let state = GameBuilder::new()
//!     .piece(Position::new(0, 4)?, Player::White, PieceKind::King)
//!     .piece(Position::new(7, 4)?, Player::Black, PieceKind::King)
//!     .piece(Position::new(1, 0)?, Player::White, PieceKind::Pawn)
//!     .side_to_move(Player::White)
//!     .build();
//! assert!(!state.is_game_over());
//! # Ok::<(), chess_rules::InvalidPosition>(())
//! ```

use super::state::RepetitionTable;
use super::types::{CastleSide, CastlingRights, Piece, PieceKind, Player, Position};
use super::{Board, GameState};

/// A fluent builder for `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Player,
    castling_rights: CastlingRights,
    en_passant_target: Option<Position>,
    halfmove_clock: u32,
}

impl GameBuilder {
    /// Create a builder with an empty board and no castling rights.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Player::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::initial(),
            side_to_move: Player::White,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            halfmove_clock: 0,
        }
    }

    /// Replace the whole placement.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = board;
        self
    }

    /// Place a piece, replacing whatever stood on the square.
    #[must_use]
    pub fn piece(mut self, pos: Position, player: Player, kind: PieceKind) -> Self {
        self.board.set(pos, Some(Piece::new(player, kind)));
        self
    }

    /// Remove the piece from a square.
    #[must_use]
    pub fn clear(mut self, pos: Position) -> Self {
        self.board.set(pos, None);
        self
    }

    /// Set which player moves first.
    #[must_use]
    pub const fn side_to_move(mut self, player: Player) -> Self {
        self.side_to_move = player;
        self
    }

    /// Set castling rights from a `CastlingRights` value.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a player.
    #[must_use]
    pub fn castle_kingside(mut self, player: Player) -> Self {
        self.castling_rights.grant(player, CastleSide::Kingside);
        self
    }

    /// Enable queenside castling for a player.
    #[must_use]
    pub fn castle_queenside(mut self, player: Player) -> Self {
        self.castling_rights.grant(player, CastleSide::Queenside);
        self
    }

    /// Enable all castling rights.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Disable all castling rights.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Position) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Set the half-move clock (for the fifty-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Build the game state.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut state = GameState {
            board: self.board,
            current_player: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            hash: 0,
            repetition_counts: RepetitionTable::new(),
        };
        state.hash = state.position_hash();
        state.repetition_counts.increment(state.hash);
        state
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = GameBuilder::starting_position().build();
        assert_eq!(built, GameState::initial());
    }

    #[test]
    fn test_empty_board_with_kings() {
        let state = GameBuilder::new()
            .piece(Position::at(0, 4), Player::White, PieceKind::King)
            .piece(Position::at(7, 4), Player::Black, PieceKind::King)
            .build();
        assert!(state.board().get(Position::at(0, 4)).is_some());
        assert!(state.board().get(Position::at(0, 0)).is_none());
        assert_eq!(state.castling_rights(), CastlingRights::none());
    }

    #[test]
    fn test_castling_rights_selection() {
        let state = GameBuilder::starting_position()
            .no_castling_rights()
            .castle_kingside(Player::White)
            .build();
        let rights = state.castling_rights();
        assert!(rights.has(Player::White, CastleSide::Kingside));
        assert!(!rights.has(Player::White, CastleSide::Queenside));
        assert!(!rights.has(Player::Black, CastleSide::Kingside));
        assert!(!rights.has(Player::Black, CastleSide::Queenside));
    }

    #[test]
    fn test_side_to_move() {
        let state = GameBuilder::new()
            .piece(Position::at(0, 4), Player::White, PieceKind::King)
            .piece(Position::at(7, 4), Player::Black, PieceKind::King)
            .side_to_move(Player::Black)
            .build();
        assert_eq!(state.current_player(), Player::Black);
    }

    #[test]
    fn test_clear_square() {
        let state = GameBuilder::starting_position()
            .clear(Position::at(0, 0))
            .build();
        assert!(state.board().get(Position::at(0, 0)).is_none());
        assert!(state.board().get(Position::at(0, 1)).is_some());
    }

    #[test]
    fn test_halfmove_clock() {
        let state = GameBuilder::starting_position().halfmove_clock(42).build();
        assert_eq!(state.halfmove_clock(), 42);
    }
}
