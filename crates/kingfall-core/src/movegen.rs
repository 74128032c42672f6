use crate::board::Board;
use crate::constants::SQUARES;
use crate::rules::is_legal;
use crate::types::{Color, MoveList, Square, SquareList};

/// Squares `player` may move the piece on `from` to, in row-major order.
pub fn legal_destinations(board: &Board, from: Square, player: Color) -> SquareList {
    SQUARES
        .iter()
        .copied()
        .filter(|&to| is_legal(board, from, to, player))
        .collect()
}

/// Every legal `(from, to)` pair for `player`, origins in row-major order.
pub fn generate_all_moves(board: &Board, player: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, piece) in board.pieces() {
        if piece.color != player {
            continue;
        }
        for to in legal_destinations(board, from, player) {
            moves.push((from, to));
        }
    }
    moves
}

pub fn has_any_move(board: &Board, player: Color) -> bool {
    board.pieces().any(|(from, piece)| {
        piece.color == player && SQUARES.iter().any(|&to| is_legal(board, from, to, player))
    })
}
