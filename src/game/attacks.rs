//! Precomputed destination tables for the fixed-offset pieces.
//!
//! Knights, kings, and pawn attacks always reach the same squares relative
//! to their origin, so the in-range destinations for each of the 64 squares
//! are computed once and reused. Sliding pieces walk the direction lists
//! instead.

use once_cell::sync::Lazy;

use super::types::{Player, Position};

/// Rook directions: up, down, right, left
pub(crate) const STRAIGHT_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions: the four diagonals
pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen and king directions: all eight
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Knight destinations for each origin square, indexed by `Position::index`.
pub(crate) static KNIGHT_ATTACKS: Lazy<[Vec<Position>; 64]> =
    Lazy::new(|| step_table(&KNIGHT_DELTAS));

/// King destinations for each origin square.
pub(crate) static KING_ATTACKS: Lazy<[Vec<Position>; 64]> =
    Lazy::new(|| step_table(&QUEEN_DIRECTIONS));

/// Squares a pawn attacks from each origin square, indexed by player.
pub(crate) static PAWN_ATTACKS: Lazy<[[Vec<Position>; 64]; 2]> =
    Lazy::new(|| [pawn_table(Player::White), pawn_table(Player::Black)]);

fn step_table(deltas: &[(isize, isize)]) -> [Vec<Position>; 64] {
    std::array::from_fn(|idx| {
        let from = Position::at(idx / 8, idx % 8);
        deltas
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    })
}

fn pawn_table(player: Player) -> [Vec<Position>; 64] {
    let dir = player.pawn_direction();
    std::array::from_fn(|idx| {
        let from = Position::at(idx / 8, idx % 8);
        [(dir, -1), (dir, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| from.offset(dr, dc))
            .collect()
    })
}
