use crate::constants::{BACK_ROW, SQUARES};
use crate::types::{Color, Piece, PieceType, Square};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square out of bounds")]
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting arrangement, black on ranks 0-1 and white on ranks 6-7.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.setup_starting_position();
        board
    }

    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece on `square`; squares off the board read as empty.
    pub fn get(&self, square: Square) -> Option<Piece> {
        let (r, f) = square_coords(square)?;
        self.squares[r][f]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn put(&mut self, piece: Piece, square: Square) -> Result<Option<Piece>, BoardError> {
        let (r, f) = square_coords(square).ok_or(BoardError::OutOfBounds)?;
        Ok(self.squares[r][f].replace(piece))
    }

    pub fn remove(&mut self, square: Square) -> Result<Option<Piece>, BoardError> {
        let (r, f) = square_coords(square).ok_or(BoardError::OutOfBounds)?;
        Ok(self.squares[r][f].take())
    }

    /// Rows in storage order, for presentation.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        SQUARES
            .iter()
            .filter_map(|&square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceType::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(square, _)| square)
    }

    pub fn has_king(&self, color: Color) -> bool {
        self.king_square(color).is_some()
    }

    fn setup_starting_position(&mut self) {
        self.load_back_row(Color::Black, 0);
        self.load_pawn_row(Color::Black);
        self.load_pawn_row(Color::White);
        self.load_back_row(Color::White, 7);
    }

    fn load_back_row(&mut self, color: Color, rank: usize) {
        for (file, piece_type) in BACK_ROW.into_iter().enumerate() {
            self.squares[rank][file] = Some(Piece::new(piece_type, color));
        }
    }

    fn load_pawn_row(&mut self, color: Color) {
        let rank = usize::from(color.pawn_start_rank());
        self.squares[rank] = [Some(Piece::new(PieceType::Pawn, color)); 8];
    }
}

fn square_coords(square: Square) -> Option<(usize, usize)> {
    if !square.is_valid() {
        return None;
    }
    Some((usize::from(square.rank), usize::from(square.file)))
}
