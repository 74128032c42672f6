use kingfall_core::{
    Board, Color, GameState, Move, Piece, PieceType, PositionError, Square, Status,
    STARTING_POSITION,
};

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank).expect("valid square")
}

#[test]
fn new_state_matches_starting_position() {
    let state = GameState::new();
    assert_eq!(state.board(), &Board::new());
    assert_eq!(state.turn(), Color::White);
    assert_eq!(state.status(), Status::Ongoing);
    assert!(state.history().is_empty());
    assert!(state.captured(Color::White).is_empty());
    assert!(state.captured(Color::Black).is_empty());
    assert_eq!(state.last_move(), None);
    assert_eq!(state.fen(), STARTING_POSITION);
}

#[test]
fn apply_move_updates_board_turn_and_history() {
    let mut state = GameState::new();
    let mv = state.apply_move(sq(4, 6), sq(4, 4));

    let pawn = Piece::new(PieceType::Pawn, Color::White);
    assert_eq!(mv, Move::new(Color::White, pawn, sq(4, 6), sq(4, 4)));
    assert_eq!(state.board().get(sq(4, 4)), Some(pawn));
    assert_eq!(state.board().get(sq(4, 6)), None);
    assert_eq!(state.turn(), Color::Black);
    assert_eq!(state.history(), &[mv]);
    assert_eq!(state.last_move(), Some(&mv));
    assert_eq!(state.status(), Status::Ongoing);
    assert_eq!(
        state.fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b"
    );
}

#[test]
fn turn_alternates_and_history_grows_by_one() {
    let mut state = GameState::new();
    let line = [
        (sq(4, 6), sq(4, 4)),
        (sq(4, 1), sq(4, 3)),
        (sq(6, 7), sq(5, 5)),
        (sq(1, 0), sq(2, 2)),
    ];
    for (i, (from, to)) in line.into_iter().enumerate() {
        let mover = state.turn();
        state.apply_move(from, to);
        assert_eq!(state.turn(), mover.opposite());
        assert_eq!(state.history().len(), i + 1);
        assert_eq!(state.history()[i].color, mover);
    }
    assert_eq!(state.turn(), Color::White);
}

#[test]
fn captured_piece_is_recorded_under_its_own_color() {
    let mut state = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w").unwrap();
    let mv = state.apply_move(sq(4, 4), sq(3, 3));

    let black_pawn = Piece::new(PieceType::Pawn, Color::Black);
    assert_eq!(mv.captured, Some(black_pawn));
    assert!(mv.is_capture());
    assert_eq!(state.captured(Color::Black), &[black_pawn]);
    assert!(state.captured(Color::White).is_empty());
    assert_eq!(
        state.board().get(sq(3, 3)),
        Some(Piece::new(PieceType::Pawn, Color::White))
    );
}

#[test]
fn captures_accumulate_in_order() {
    let mut state = GameState::from_fen("4k3/8/8/1n1b4/8/8/8/1Q2K3 w").unwrap();
    state.apply_move(sq(1, 7), sq(1, 3));
    state.apply_move(sq(4, 0), sq(4, 1));
    state.apply_move(sq(1, 3), sq(3, 3));

    assert_eq!(
        state.captured(Color::Black),
        &[
            Piece::new(PieceType::Knight, Color::Black),
            Piece::new(PieceType::Bishop, Color::Black),
        ]
    );
    assert_eq!(state.history().iter().filter(|mv| mv.is_capture()).count(), 2);
}

#[test]
fn capturing_the_king_ends_the_game() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/8/4QK2 w").unwrap();
    assert_eq!(state.status(), Status::Ongoing);

    let mv = state.apply_move(sq(4, 7), sq(4, 0));
    assert_eq!(mv.captured, Some(Piece::new(PieceType::King, Color::Black)));
    assert_eq!(state.status(), Status::WhiteWins);
    assert!(state.moves().is_empty());
    assert!(!state.has_any_move());
}

#[test]
fn black_can_win_by_king_capture() {
    let mut state = GameState::from_fen("4k3/8/8/8/8/8/4r3/4K3 b").unwrap();
    state.apply_move(sq(4, 6), sq(4, 7));
    assert_eq!(state.status(), Status::BlackWins);
    assert_eq!(state.status().winner(), Some(Color::Black));
}

#[test]
fn board_without_black_king_is_won_by_white_after_any_white_move() {
    let mut state = GameState::new();
    let fen = {
        let mut board = *state.board();
        board.remove(sq(4, 0)).unwrap();
        kingfall_core::encode_fen(&kingfall_core::ParsedFen {
            board,
            turn: Color::White,
        })
    };
    state = GameState::from_fen(&fen).unwrap();
    state.apply_move(sq(6, 7), sq(5, 5));
    assert_eq!(state.status(), Status::WhiteWins);
}

#[test]
fn legal_query_follows_side_to_move() {
    let state = GameState::new();
    assert!(state.is_legal(sq(4, 6), sq(4, 4)));
    assert!(!state.is_legal(sq(4, 1), sq(4, 3)));
    assert_eq!(state.legal_destinations(sq(6, 7)).as_slice(), &[sq(5, 5), sq(7, 5)]);
    assert_eq!(state.moves().len(), 20);
}

#[test]
#[should_panic(expected = "unvalidated move")]
fn apply_move_asserts_legality() {
    let mut state = GameState::new();
    state.apply_move(sq(4, 6), sq(4, 3));
}

#[test]
#[should_panic(expected = "unvalidated move")]
fn apply_move_rejects_wrong_side() {
    let mut state = GameState::new();
    state.apply_move(sq(4, 1), sq(4, 3));
}

#[test]
fn from_fen_reports_errors() {
    let err = GameState::from_fen("not a board").unwrap_err();
    assert!(matches!(err, PositionError::Fen(_)));
    assert!(!err.to_string().is_empty());
}
