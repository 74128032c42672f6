use crate::types::{PieceType, Square};

pub const BOARD_SIZE: u8 = 8;

pub const PIECE_CODES: [char; 6] = ['p', 'r', 'n', 'b', 'q', 'k'];

/// Back row from file a to file h, shared by both colors.
pub const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Every square in row-major order: rank 0 file 0 through rank 7 file 7.
pub const SQUARES: [Square; 64] = {
    let mut out = [Square::new_unchecked(0, 0); 64];
    let mut i = 0usize;
    while i < 64 {
        out[i] = Square::new_unchecked((i % 8) as u8, (i / 8) as u8);
        i += 1;
    }
    out
};
