//! Core types for the game module.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Position`: a board coordinate (row, column)
//! - `Piece`, `PieceKind`, `Player`: piece representation
//! - `Move`, `MoveKind`: move representation
//! - `CastleSide`, `CastlingRights`: castling bookkeeping

mod castling;
mod moves;
mod piece;
mod position;

pub use castling::{CastleSide, CastlingRights};
pub use moves::{Move, MoveKind};
pub use piece::{Piece, PieceKind, Player};
pub use position::Position;

pub(crate) use piece::PROMOTION_KINDS;
