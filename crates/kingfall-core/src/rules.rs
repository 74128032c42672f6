//! Single-move legality.
//!
//! [`is_legal`] validates one candidate move against the moving piece's
//! movement pattern, blocking pieces, and same-color occupancy. It does not
//! look at whether the mover's own king is left capturable.

use crate::board::Board;
use crate::constants::{KING_OFFSETS, KNIGHT_OFFSETS};
use crate::types::{Color, Piece, PieceType, Square};

pub fn is_legal(board: &Board, from: Square, to: Square, player: Color) -> bool {
    if !from.is_valid() || !to.is_valid() || from == to {
        return false;
    }
    let Some(piece) = board.get(from) else {
        return false;
    };
    if piece.color != player {
        return false;
    }
    if board.get(to).is_some_and(|target| target.color == player) {
        return false;
    }

    match piece.piece_type {
        PieceType::Pawn => pawn_can_move(board, piece, from, to),
        PieceType::Rook => rook_can_move(board, from, to),
        PieceType::Knight => knight_can_move(from, to),
        PieceType::Bishop => bishop_can_move(board, from, to),
        PieceType::Queen => rook_can_move(board, from, to) || bishop_can_move(board, from, to),
        PieceType::King => king_can_move(from, to),
    }
}

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file as i8 - from.file as i8,
        to.rank as i8 - from.rank as i8,
    )
}

fn pawn_can_move(board: &Board, pawn: Piece, from: Square, to: Square) -> bool {
    let dir = pawn.color.pawn_direction();
    let (df, dr) = deltas(from, to);

    if df == 0 && dr == dir {
        return board.is_empty(to);
    }
    if df == 0 && dr == 2 * dir {
        return from.rank == pawn.color.pawn_start_rank()
            && from.offset(0, dir).is_some_and(|step| board.is_empty(step))
            && board.is_empty(to);
    }
    if df.abs() == 1 && dr == dir {
        return board
            .get(to)
            .is_some_and(|target| target.color != pawn.color);
    }
    false
}

fn rook_can_move(board: &Board, from: Square, to: Square) -> bool {
    (from.file == to.file || from.rank == to.rank) && path_is_clear(board, from, to)
}

fn bishop_can_move(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df.abs() == dr.abs() && path_is_clear(board, from, to)
}

fn knight_can_move(from: Square, to: Square) -> bool {
    KNIGHT_OFFSETS.contains(&deltas(from, to))
}

fn king_can_move(from: Square, to: Square) -> bool {
    KING_OFFSETS.contains(&deltas(from, to))
}

/// True when every square strictly between `from` and `to` is empty.
/// Callers guarantee the two squares share a file, rank, or diagonal.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    let (step_f, step_r) = (df.signum(), dr.signum());
    let mut current = from;
    loop {
        let Some(next) = current.offset(step_f, step_r) else {
            return false;
        };
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
}
