//! Zobrist hashing for chess positions.
//!
//! Provides 64-bit position hashes for the repetition counts behind
//! threefold-repetition detection.

use rand::prelude::*;

pub(crate) struct ZobristKeys {
    // piece_keys[piece_kind][player][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6], // PieceKind(0-5), Player(0-1), square(0-63)
    pub(crate) black_to_move_key: u64,
    // castling_keys[player][side] : 0=White, 1=Black; 0=Kingside, 1=Queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // en_passant_keys[col] (only the column matters for the EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for kind in &mut piece_keys {
            for player in kind.iter_mut() {
                for key in player.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for player in &mut castling_keys {
            for key in player.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

// Initialize Zobrist keys lazily and globally
pub(crate) static ZOBRIST: std::sync::LazyLock<ZobristKeys> =
    std::sync::LazyLock::new(ZobristKeys::new);
