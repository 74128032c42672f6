use std::fmt;

use crate::board::Board;
use crate::types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Ongoing,
    WhiteWins,
    BlackWins,
}

impl Status {
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => Self::WhiteWins,
            Color::Black => Self::BlackWins,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::WhiteWins => "white_wins",
            Self::BlackWins => "black_wins",
        }
    }

    /// Banner text shown by the status badge.
    pub const fn banner(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::WhiteWins => "White wins!",
            Self::BlackWins => "Black wins!",
        }
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::Ongoing => None,
            Self::WhiteWins => Some(Color::White),
            Self::BlackWins => Some(Color::Black),
        }
    }

    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn is_king_captured(board: &Board) -> bool {
    !board.has_king(Color::White) || !board.has_king(Color::Black)
}

/// Status of `board` with `turn` to move. A side without a king has lost;
/// the side to move is checked first.
pub fn evaluate_status(board: &Board, turn: Color) -> Status {
    if !board.has_king(turn) {
        Status::won_by(turn.opposite())
    } else if !board.has_king(turn.opposite()) {
        Status::won_by(turn)
    } else {
        Status::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceType, Square};

    #[test]
    fn status_strings() {
        assert_eq!(Status::Ongoing.as_str(), "ongoing");
        assert_eq!(Status::WhiteWins.to_string(), "white_wins");
        assert_eq!(Status::BlackWins.banner(), "Black wins!");
        assert_eq!(Status::won_by(Color::White), Status::WhiteWins);
        assert_eq!(Status::BlackWins.winner(), Some(Color::Black));
        assert!(!Status::Ongoing.is_over());
    }

    #[test]
    fn side_to_move_without_king_loses() {
        let mut board = Board::empty();
        board
            .put(Piece::new(PieceType::King, Color::White), Square::new_unchecked(4, 7))
            .unwrap();
        assert_eq!(evaluate_status(&board, Color::Black), Status::WhiteWins);
        assert_eq!(evaluate_status(&board, Color::White), Status::WhiteWins);
        assert!(is_king_captured(&board));

        assert_eq!(evaluate_status(&Board::empty(), Color::Black), Status::WhiteWins);
        assert_eq!(evaluate_status(&Board::new(), Color::White), Status::Ongoing);
    }
}
