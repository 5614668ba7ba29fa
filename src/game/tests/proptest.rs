//! Property-based tests using proptest.
//!
//! Each property plays out a random legal game from the initial position,
//! driven by a seeded RNG so failures reproduce, and checks an invariant
//! after every move.

use proptest::prelude::*;

use super::{GameState, PieceKind, Player};
use crate::game::CastleSide;

/// Strategy to generate a random playout length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: every generated move is accepted, and never leaves the
    /// mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_the_king_safe(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use rand::prelude::*;

        let mut state = GameState::initial();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mover = state.current_player();
            let mv = moves[rng.gen_range(0..moves.len())];
            prop_assert!(state.make_move(mv).is_ok(), "legal move rejected: {}", mv);
            prop_assert!(
                !state.board().is_in_check(mover),
                "move left the mover in check: {}",
                mv
            );
        }
    }

    /// Property: both kings stay on the board through any legal sequence
    #[test]
    fn prop_kings_survive(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use rand::prelude::*;

        let mut state = GameState::initial();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(mv).expect("legal move rejected");
            prop_assert!(state
                .board()
                .find_piece(Player::White, PieceKind::King)
                .is_some());
            prop_assert!(state
                .board()
                .find_piece(Player::Black, PieceKind::King)
                .is_some());
        }
    }

    /// Property: the stored hash always matches a recomputation from scratch
    #[test]
    fn prop_hash_matches_recomputation(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use rand::prelude::*;

        let mut state = GameState::initial();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(mv).expect("legal move rejected");
            prop_assert_eq!(state.hash, state.position_hash());
        }
    }

    /// Property: an en passant target only ever follows a double pawn push
    #[test]
    fn prop_en_passant_target_follows_double_push(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use rand::prelude::*;

        let mut state = GameState::initial();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(mv).expect("legal move rejected");
            if state.en_passant_target().is_some() {
                prop_assert!(mv.is_double_pawn_push());
            }
        }
    }

    /// Property: castling rights only ever shrink
    #[test]
    fn prop_castling_rights_only_shrink(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
    ) {
        use rand::prelude::*;

        let mut state = GameState::initial();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let before = state.castling_rights();
            let mv = moves[rng.gen_range(0..moves.len())];
            state.make_move(mv).expect("legal move rejected");
            let after = state.castling_rights();
            for player in Player::BOTH {
                for side in CastleSide::BOTH {
                    prop_assert!(
                        before.has(player, side) || !after.has(player, side),
                        "castling right reappeared for {} after {}",
                        player,
                        mv
                    );
                }
            }
        }
    }
}
