//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation
//! - `perft.rs` - Move path enumeration against known node counts
//! - `special_moves.rs` - Castling, en passant, and promotion
//! - `termination.rs` - Checkmate, stalemate, and draw detection
//! - `state.rs` - Construction, move application, and bookkeeping
//! - `proptest.rs` - Property-based tests

mod proptest;
mod state;

use super::{Board, GameState, Move, Piece, PieceKind, Player, Position};

/// Parse an algebraic square like "e4".
fn pos(notation: &str) -> Position {
    notation.parse().expect("bad square notation")
}

/// Build a board from an eight-row piece diagram.
///
/// The first row of the diagram is row 7 (Black's back rank), matching how
/// a board is usually drawn. Uppercase letters are White pieces, lowercase
/// Black, and '.' an empty square.
fn board_from_diagram(diagram: &str) -> Board {
    let cells: Vec<char> = diagram.split_whitespace().flat_map(str::chars).collect();
    assert_eq!(cells.len(), 64, "diagram must name 64 squares");

    let mut board = Board::empty();
    for (i, &c) in cells.iter().enumerate() {
        if c == '.' {
            continue;
        }
        let kind = PieceKind::from_char(c).expect("bad piece letter in diagram");
        let player = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let square = Position::new(7 - i / 8, i % 8).expect("diagram square in range");
        board.set(square, Some(Piece::new(player, kind)));
    }
    board
}

/// Find the move between two squares among a piece's legal moves.
fn find_move(
    state: &GameState,
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
) -> Move {
    for m in state.legal_moves_for_piece(from) {
        if m.to() == to && m.promotion() == promotion {
            return m;
        }
    }
    panic!("Expected move not found: {from}{to}");
}

/// Play a whitespace-separated coordinate move sequence like "e2e4 e7e5".
///
/// Promotions carry a trailing piece letter, e.g. "e7e8q".
fn play(state: &mut GameState, sequence: &str) {
    for token in sequence.split_whitespace() {
        let from = pos(&token[0..2]);
        let to = pos(&token[2..4]);
        let promotion = token[4..]
            .chars()
            .next()
            .map(|c| PieceKind::from_char(c).expect("bad promotion letter"));
        let mv = find_move(state, from, to, promotion);
        state.make_move(mv).expect("legal move rejected");
    }
}
