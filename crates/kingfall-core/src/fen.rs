use crate::board::{Board, BoardError};
use crate::constants::PIECE_CODES;
use crate::types::{Color, Piece, Square};
use thiserror::Error;

pub const STARTING_POSITION: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFen {
    pub board: Board,
    pub turn: Color,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid fen")]
    Invalid,
    #[error("{0}")]
    Validation(String),
    #[error("invalid piece")]
    InvalidPiece,
    #[error("invalid turn")]
    InvalidTurn,
    #[error("board error")]
    Board(#[from] BoardError),
}

/// Checks the placement and active-color fields. Further standard fields
/// (castling, en passant, clocks) are accepted and ignored.
pub fn validate_fen(fen: &str) -> Result<(), FenError> {
    let parts: Vec<&str> = fen.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(FenError::Validation(format!(
            "expected at least 2 fields, received {}",
            parts.len()
        )));
    }

    let ranks: Vec<&str> = parts[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::Validation(format!(
            "1st field (piece positions) is invalid [expected 8 ranks, received {}]",
            ranks.len()
        )));
    }

    for (i, rank) in ranks.iter().enumerate() {
        let mut count = 0u32;
        for ch in rank.chars() {
            if let Some(n) = ch.to_digit(10) {
                if n == 0 || n > 8 {
                    return Err(FenError::Validation(format!(
                        "1st field (piece positions) is invalid [bad empty run '{}'] in rank: {}",
                        ch,
                        i + 1
                    )));
                }
                count += n;
            } else if PIECE_CODES.contains(&ch.to_ascii_lowercase()) {
                count += 1;
            } else {
                return Err(FenError::Validation(
                    "1st field (piece positions) is invalid [invalid piece]".to_string(),
                ));
            }
        }
        if count != 8 {
            return Err(FenError::Validation(format!(
                "1st field (piece positions) is invalid [expected 8 squares, received {}] in rank: {}",
                count,
                i + 1
            )));
        }
    }

    for king in ['K', 'k'] {
        if parts[0].chars().filter(|&ch| ch == king).count() > 1 {
            return Err(FenError::Validation(format!(
                "1st field (piece positions) is invalid [more than one king '{king}']"
            )));
        }
    }

    let mut turn = parts[1].chars();
    match (turn.next().and_then(Color::from_code), turn.next()) {
        (Some(_), None) => Ok(()),
        _ => Err(FenError::Validation(format!(
            "2nd field (active player) is invalid [expected 'w' or 'b', received {}]",
            parts[1]
        ))),
    }
}

pub fn parse_fen(fen: &str) -> Result<ParsedFen, FenError> {
    validate_fen(fen)?;
    let parts: Vec<&str> = fen.split_whitespace().collect();
    let turn = parts[1]
        .chars()
        .next()
        .and_then(Color::from_code)
        .ok_or(FenError::InvalidTurn)?;

    let mut board = Board::empty();
    for (rank, rank_desc) in parts[0].split('/').enumerate() {
        let mut file = 0u8;
        for ch in rank_desc.chars() {
            if let Some(n) = ch.to_digit(10) {
                file += n as u8;
                continue;
            }
            let piece = Piece::from_code(ch).ok_or(FenError::InvalidPiece)?;
            board.put(piece, Square::new_unchecked(file, rank as u8))?;
            file += 1;
        }
        if file != 8 {
            return Err(FenError::Invalid);
        }
    }

    Ok(ParsedFen { board, turn })
}

pub fn encode_fen(state: &ParsedFen) -> String {
    let mut placement = String::new();
    for (rank, row) in state.board.rows().iter().enumerate() {
        let mut empties = 0u32;
        for square in row {
            match square {
                Some(piece) => {
                    if empties > 0 {
                        placement.push(char::from_digit(empties, 10).unwrap_or('1'));
                        empties = 0;
                    }
                    placement.push(piece.code());
                }
                None => empties += 1,
            }
        }
        if empties > 0 {
            placement.push(char::from_digit(empties, 10).unwrap_or('1'));
        }
        if rank < 7 {
            placement.push('/');
        }
    }

    format!("{} {}", placement, state.turn.to_code())
}
