use super::sq;
use crate::board::{Board, Color, MoveError, MoveOutcome, Piece, PieceKind};

#[test]
fn test_double_push_from_start() {
    let mut board = Board::new();
    let outcome = board.attempt_move_str("E2", "E4");

    assert_eq!(outcome, Ok(MoveOutcome::Played));
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);
    assert_eq!(board.side_to_move(), Color::Black);
    assert_eq!(board.history(), ["e4"]);
    assert!(board.piece_at(sq("e2")).is_none());
    assert_eq!(
        board.piece_at(sq("e4")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn test_three_square_pawn_push_is_illegal() {
    let mut board = Board::new();
    let result = board.attempt_move_str("E2", "E5");

    assert_eq!(
        result,
        Err(MoveError::IllegalDestination {
            from: sq("e2"),
            to: sq("e5")
        })
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_black_cannot_move_on_white_turn() {
    let mut board = Board::new();
    let result = board.attempt_move_str("e7", "e5");

    assert_eq!(
        result,
        Err(MoveError::NotYourTurn {
            color: Color::Black
        })
    );
    assert_eq!(board, Board::new());
}

#[test]
fn test_empty_source_square() {
    let mut board = Board::new();
    assert_eq!(
        board.attempt_move_str("e4", "e5"),
        Err(MoveError::NoPieceAtSource { square: sq("e4") })
    );
}

#[test]
fn test_bad_coordinate_notation() {
    let mut board = Board::new();
    assert_eq!(
        board.attempt_move_str("z9", "e4"),
        Err(MoveError::InvalidCoordinate {
            notation: "z9".to_string()
        })
    );
    assert_eq!(
        board.attempt_move_str("e2", "e44"),
        Err(MoveError::InvalidCoordinate {
            notation: "e44".to_string()
        })
    );
}

#[test]
fn test_turn_checked_before_destination() {
    let mut board = Board::new();
    // Both wrong side and impossible destination: turn wins.
    assert!(matches!(
        board.attempt_move_str("a8", "h1"),
        Err(MoveError::NotYourTurn { .. })
    ));
}

#[test]
fn test_pinned_piece_cannot_leave_line() {
    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/4B3/4K3 w 0 1");
    let before = board.clone();

    assert!(board.pseudo_legal_moves(sq("e2")).contains(&sq("d3")));
    assert_eq!(
        board.attempt_move_str("e2", "d3"),
        Err(MoveError::SelfCheck {
            from: sq("e2"),
            to: sq("d3")
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/3r4/4K3 w 0 1");
    let before = board.clone();

    assert!(matches!(
        board.attempt_move_str("e1", "e2"),
        Err(MoveError::SelfCheck { .. })
    ));
    assert_eq!(board, before);

    // Taking the unprotected rook is fine.
    assert_eq!(board.attempt_move_str("e1", "d2"), Ok(MoveOutcome::Played));
    assert_eq!(board.captured(Color::Black), [Piece::from_char('r').unwrap()]);
}

#[test]
fn test_must_answer_check() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/P7/r3K3 w 0 1");
    assert!(board.is_in_check(Color::White));
    assert!(matches!(
        board.attempt_move_str("a2", "a3"),
        Err(MoveError::SelfCheck { .. })
    ));
    assert_eq!(board.attempt_move_str("e1", "e2"), Ok(MoveOutcome::Played));
}

#[test]
fn test_capture_resets_clock_and_records_piece() {
    let mut board = Board::from_fen("4k3/8/8/3p4/8/2N5/8/4K3 w 7 20");
    assert_eq!(board.attempt_move_str("c3", "d5"), Ok(MoveOutcome::Played));

    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(
        board.captured(Color::Black),
        [Piece::new(Color::Black, PieceKind::Pawn)]
    );
    assert!(board.captured(Color::White).is_empty());
    assert_eq!(board.history(), ["Nxd5"]);
}

#[test]
fn test_clocks_advance() {
    let mut board = Board::new();
    board.attempt_move_str("g1", "f3").unwrap();
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.fullmove_number(), 1);

    board.attempt_move_str("g8", "f6").unwrap();
    assert_eq!(board.halfmove_clock(), 2);
    assert_eq!(board.fullmove_number(), 2);

    board.attempt_move_str("e2", "e3").unwrap();
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 2);
    assert_eq!(board.to_fen(), "rnbqkb1r/pppppppp/5n2/8/8/4PN2/PPPP1PPP/RNBQKB1R b 0 2");
}

#[test]
fn test_check_outcome() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w 0 1");
    let outcome = board.attempt_move_str("a1", "a8").unwrap();
    assert_eq!(outcome, MoveOutcome::Check);
    assert!(!outcome.is_terminal());
    assert!(board.is_in_check(Color::Black));
    assert_eq!(board.history(), ["Ra8+"]);
}

#[test]
fn test_fools_mate() {
    let mut board = Board::new();
    assert_eq!(board.attempt_move_str("f2", "f3"), Ok(MoveOutcome::Played));
    assert_eq!(board.attempt_move_str("e7", "e5"), Ok(MoveOutcome::Played));
    assert_eq!(board.attempt_move_str("g2", "g4"), Ok(MoveOutcome::Played));
    assert_eq!(
        board.attempt_move_str("d8", "h4"),
        Ok(MoveOutcome::CheckMate {
            winner: Color::Black
        })
    );

    assert!(MoveOutcome::CheckMate {
        winner: Color::Black
    }
    .is_terminal());

    // The mating move stays on the board.
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.history(), ["f3", "e5", "g4", "Qh4#"]);
    assert!(board.is_checkmate());
    assert!(board.legal_moves(Color::White).is_empty());
    assert!(board.attempt_move_str("e1", "f2").is_err());
}

#[test]
fn test_stalemating_move_is_a_draw() {
    let mut board = Board::from_fen("7k/8/6K1/8/8/8/8/5Q2 w 0 1");
    let outcome = board.attempt_move_str("f1", "f7").unwrap();
    assert_eq!(outcome, MoveOutcome::Draw);
    assert!(outcome.is_terminal());
    assert!(board.is_stalemate());
    assert!(!board.is_in_check(Color::Black));
    assert_eq!(board.piece_at(sq("f7")).map(|p| p.kind), Some(PieceKind::Queen));
}

#[test]
fn test_validate_move_does_not_commit() {
    let board = Board::new();
    assert_eq!(board.validate_move(sq("e2"), sq("e4")), Ok(()));
    assert_eq!(board, Board::new());
}

#[test]
fn test_counters_saturate_at_max() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K1N1 w 4294967295 1");
    assert_eq!(board.attempt_move_str("g1", "f3"), Ok(MoveOutcome::Played));
    assert_eq!(board.halfmove_clock(), u32::MAX);
    assert_eq!(board.fullmove_number(), 1);

    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/4K3 b 0 4294967295");
    assert_eq!(board.attempt_move_str("e8", "d8"), Ok(MoveOutcome::Played));
    assert_eq!(board.fullmove_number(), u32::MAX);
    assert_eq!(board.halfmove_clock(), 1);
    assert_eq!(board.side_to_move(), Color::White);
}
