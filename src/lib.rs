pub mod game;
mod zobrist;

pub use game::{
    Board, CastleSide, CastlingRights, EndReason, GameBuilder, GameState, IllegalMoveError,
    InvalidPosition, Move, MoveKind, Outcome, Piece, PieceKind, Player, Position,
};
