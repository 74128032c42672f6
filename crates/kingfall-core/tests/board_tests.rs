use std::mem::size_of;

use kingfall_core::board::{Board, BoardError};
use kingfall_core::types::{Color, Piece, PieceType, Square};
use kingfall_core::SQUARES;

fn sq(file: u8, rank: u8) -> Square {
    Square::new(file, rank).expect("valid square")
}

#[test]
fn board_is_compact() {
    assert_eq!(size_of::<Board>(), 128);
}

#[test]
fn board_new_builds_standard_setup() {
    let board = Board::new();

    assert_eq!(
        board.get(sq(4, 0)),
        Some(Piece::new(PieceType::King, Color::Black))
    );
    assert_eq!(
        board.get(sq(3, 0)),
        Some(Piece::new(PieceType::Queen, Color::Black))
    );
    assert_eq!(
        board.get(sq(4, 7)),
        Some(Piece::new(PieceType::King, Color::White))
    );
    assert_eq!(
        board.get(sq(1, 7)),
        Some(Piece::new(PieceType::Knight, Color::White))
    );
    assert_eq!(
        board.get(sq(7, 7)),
        Some(Piece::new(PieceType::Rook, Color::White))
    );
    for file in 0..8 {
        assert_eq!(
            board.get(sq(file, 1)),
            Some(Piece::new(PieceType::Pawn, Color::Black))
        );
        assert_eq!(
            board.get(sq(file, 6)),
            Some(Piece::new(PieceType::Pawn, Color::White))
        );
        for rank in 2..6 {
            assert!(board.is_empty(sq(file, rank)));
        }
    }
    assert_eq!(board.pieces().count(), 32);
}

#[test]
fn put_and_remove_report_previous_occupant() {
    let mut board = Board::empty();
    let square = sq(3, 3);
    let rook = Piece::new(PieceType::Rook, Color::White);
    let bishop = Piece::new(PieceType::Bishop, Color::Black);

    assert_eq!(board.put(rook, square), Ok(None));
    assert_eq!(board.put(bishop, square), Ok(Some(rook)));
    assert_eq!(board.remove(square), Ok(Some(bishop)));
    assert_eq!(board.remove(square), Ok(None));
    assert!(board.is_empty(square));
}

#[test]
fn out_of_bounds_squares_are_rejected() {
    let mut board = Board::new();
    let off = Square::new_unchecked(8, 0);
    let pawn = Piece::new(PieceType::Pawn, Color::White);

    assert_eq!(board.get(off), None);
    assert_eq!(board.put(pawn, off), Err(BoardError::OutOfBounds));
    assert_eq!(board.remove(Square::new_unchecked(0, 9)), Err(BoardError::OutOfBounds));
}

#[test]
fn pieces_iterate_in_row_major_order() {
    let board = Board::new();
    let squares: Vec<Square> = board.pieces().map(|(square, _)| square).collect();
    let expected: Vec<Square> = SQUARES
        .iter()
        .copied()
        .filter(|square| square.rank < 2 || square.rank > 5)
        .collect();
    assert_eq!(squares, expected);
}

#[test]
fn king_lookup() {
    let mut board = Board::new();
    assert_eq!(board.king_square(Color::White), Some(sq(4, 7)));
    assert_eq!(board.king_square(Color::Black), Some(sq(4, 0)));

    board.remove(sq(4, 0)).unwrap();
    assert!(!board.has_king(Color::Black));
    assert!(board.has_king(Color::White));
}

#[test]
fn rows_follow_storage_order() {
    let board = Board::new();
    let rows = board.rows();
    assert_eq!(rows[0][4], Some(Piece::new(PieceType::King, Color::Black)));
    assert_eq!(rows[7][3], Some(Piece::new(PieceType::Queen, Color::White)));
    assert_eq!(rows[4], [None; 8]);
}
