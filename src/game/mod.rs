//! Chess rules: board placement, legal move generation, and termination.
//!
//! The board is an 8x8 grid of optional pieces addressed by [`Position`].
//! A [`GameState`] layers the turn, castling rights, en passant target, and
//! clocks on top, hands out legal moves, and applies them. The full rules
//! are covered: castling, en passant, promotion, and checkmate, stalemate,
//! and draw detection.
//!
//! # Example
//! ```
//! use chess_rules::game::GameState;
//!
//! let state = GameState::initial();
//! for mv in state.legal_moves_for_piece("e2".parse()?) {
//!     println!("{mv}");
//! }
//! # Ok::<(), chess_rules::InvalidPosition>(())
//! ```

mod attacks;
mod board;
mod builder;
mod error;
mod movegen;
mod state;
mod termination;
mod types;

#[cfg(test)]
mod tests;

pub use board::Board;
pub use builder::GameBuilder;
pub use error::{IllegalMoveError, InvalidPosition};
pub use state::GameState;
pub use termination::{EndReason, Outcome};
pub use types::{
    CastleSide, CastlingRights, Move, MoveKind, Piece, PieceKind, Player, Position,
};

pub(crate) use types::PROMOTION_KINDS;
