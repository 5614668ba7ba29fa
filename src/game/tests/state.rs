//! Game state construction, move application, and bookkeeping tests.

use super::{
    board_from_diagram, find_move, play, pos, Board, GameState, Piece, PieceKind, Player, Position,
};
use crate::game::{CastleSide, CastlingRights, InvalidPosition, Move, MoveKind};

#[test]
fn test_position_bounds() {
    assert!(Position::new(0, 0).is_ok());
    assert!(Position::new(7, 7).is_ok());
    assert_eq!(
        Position::new(8, 0),
        Err(InvalidPosition::RowOutOfBounds { row: 8 })
    );
    assert_eq!(
        Position::new(0, 9),
        Err(InvalidPosition::ColOutOfBounds { col: 9 })
    );
}

#[test]
fn test_position_notation() {
    assert_eq!(pos("a1"), Position::new(0, 0).unwrap());
    assert_eq!(pos("h8"), Position::new(7, 7).unwrap());
    assert_eq!(pos("e4").row(), 3);
    assert_eq!(pos("e4").col(), 4);
    assert_eq!(pos("e4").to_string(), "e4");
    assert!("i4".parse::<Position>().is_err());
    assert!("a9".parse::<Position>().is_err());
    assert!("e".parse::<Position>().is_err());
}

#[test]
fn test_initial_position_setup() {
    let state = GameState::initial();
    assert_eq!(state.current_player(), Player::White);
    assert_eq!(
        state.board().get(pos("e1")),
        Some(Piece::new(Player::White, PieceKind::King))
    );
    assert_eq!(
        state.board().get(pos("d8")),
        Some(Piece::new(Player::Black, PieceKind::Queen))
    );
    assert!(state.board().get(pos("e4")).is_none());
    assert_eq!(state.halfmove_clock(), 0);
    assert_eq!(state.en_passant_target(), None);
    assert_eq!(state.castling_rights(), CastlingRights::all());
    assert!(!state.is_in_check());
    assert!(!state.is_game_over());
}

#[test]
fn test_board_set_get_round_trip() {
    let mut board = Board::empty();
    let piece = Piece::new(Player::Black, PieceKind::Knight);
    assert_eq!(piece.to_string(), "n");
    board.set(pos("c6"), Some(piece));
    assert_eq!(board.get(pos("c6")), Some(piece));
    board.set(pos("c6"), None);
    assert!(board.is_empty(pos("c6")));
}

#[test]
fn test_castling_rights_inferred_from_placement() {
    // Kings at home but only White's h-rook still on its corner.
    let board = board_from_diagram(
        "
        . . . . k . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . . . . .
        . . . . K . . R
        ",
    );
    let state = GameState::new(Player::White, board);
    let rights = state.castling_rights();
    assert!(rights.has(Player::White, CastleSide::Kingside));
    assert!(!rights.has(Player::White, CastleSide::Queenside));
    assert!(!rights.has(Player::Black, CastleSide::Kingside));
    assert!(!rights.has(Player::Black, CastleSide::Queenside));
}

#[test]
fn test_illegal_move_leaves_state_untouched() {
    let mut state = GameState::initial();
    let before = state.clone();
    let mv = Move::new(pos("e2"), pos("e5"), MoveKind::Normal);
    let err = state.make_move(mv).unwrap_err();
    assert_eq!(err.attempted, mv);
    assert_eq!(state, before);
}

#[test]
fn test_stale_move_rejected() {
    let mut state = GameState::initial();
    let opening = find_move(&state, pos("e2"), pos("e4"), None);
    play(&mut state, "e2e3 a7a6");
    // The pawn has moved on; the cached move no longer applies.
    assert!(state.make_move(opening).is_err());
}

#[test]
fn test_make_move_flips_player_and_ticks_the_clock() {
    let mut state = GameState::initial();
    play(&mut state, "e2e4");
    assert_eq!(state.current_player(), Player::Black);
    assert_eq!(state.halfmove_clock(), 0);
    play(&mut state, "g8f6");
    assert_eq!(state.current_player(), Player::White);
    assert_eq!(state.halfmove_clock(), 1);
    play(&mut state, "b1c3");
    assert_eq!(state.halfmove_clock(), 2);
}

#[test]
fn test_capture_resets_the_clock() {
    let mut state = GameState::initial();
    play(&mut state, "e2e4 d7d5 g1f3 g8f6");
    assert_eq!(state.halfmove_clock(), 2);
    play(&mut state, "e4d5");
    assert_eq!(state.halfmove_clock(), 0);
}

#[test]
fn test_clone_is_independent() {
    let original = GameState::initial();
    let mut probe = original.clone();
    play(&mut probe, "e2e4");
    assert!(original.board().get(pos("e4")).is_none());
    assert_eq!(original.current_player(), Player::White);
}

#[test]
fn test_find_piece_locates_kings() {
    let state = GameState::initial();
    assert_eq!(
        state.board().find_piece(Player::White, PieceKind::King),
        Some(pos("e1"))
    );
    assert_eq!(
        state.board().find_piece(Player::Black, PieceKind::King),
        Some(pos("e8"))
    );
    assert_eq!(
        state.board().find_piece(Player::White, PieceKind::Queen),
        Some(pos("d1"))
    );
}

#[test]
fn test_check_detection() {
    let mut state = GameState::initial();
    play(&mut state, "e2e4 f7f6 d1h5");
    assert!(state.is_in_check());
    assert!(state.board().is_in_check(Player::Black));
    assert!(!state.board().is_in_check(Player::White));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_snapshot_round_trip() {
    let mut state = GameState::initial();
    play(&mut state, "e2e4 c7c5 g1f3");
    let json = serde_json::to_string(&state).expect("serialize");
    let restored: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, state);
    assert_eq!(restored.legal_moves(), state.legal_moves());
}
