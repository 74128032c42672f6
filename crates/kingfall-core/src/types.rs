use std::fmt;

use arrayvec::ArrayVec;

use crate::constants::BOARD_SIZE;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    pub const fn to_code(self) -> char {
        match self {
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'w' => Some(Self::White),
            'b' => Some(Self::Black),
            _ => None,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Lowercase name, as used in status strings and history entries.
    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }

    /// Rank index a pawn of this color advances toward, one step at a time.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn = 0,
    Rook = 1,
    Knight = 2,
    Bishop = 3,
    Queen = 4,
    King = 5,
}

impl PieceType {
    pub const ALL: [Self; 6] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
    ];

    pub const fn fen_code(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Rook => 'r',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    pub const fn from_fen_code(code: char) -> Option<Self> {
        match code {
            'p' => Some(Self::Pawn),
            'r' => Some(Self::Rook),
            'n' => Some(Self::Knight),
            'b' => Some(Self::Bishop),
            'q' => Some(Self::Queen),
            'k' => Some(Self::King),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Rook => "rook",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Piece {
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        Self { piece_type, color }
    }

    pub const fn color(self) -> Color {
        self.color
    }

    pub const fn kind(self) -> PieceType {
        self.piece_type
    }

    /// Single-character code: uppercase for white, lowercase for black.
    pub const fn code(self) -> char {
        let code = self.piece_type.fen_code();
        match self.color {
            Color::White => code.to_ascii_uppercase(),
            Color::Black => code,
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        let color = if code.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        match PieceType::from_fen_code(code.to_ascii_lowercase()) {
            Some(piece_type) => Some(Self { piece_type, color }),
            None => None,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color.name(), self.piece_type.name())
    }
}

/// Zero-based board coordinate. Rank 0 is black's back row.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: u8,
    pub rank: u8,
}

impl Square {
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < BOARD_SIZE && rank < BOARD_SIZE {
            Some(Self { file, rank })
        } else {
            None
        }
    }

    pub const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    pub const fn is_valid(self) -> bool {
        self.file < BOARD_SIZE && self.rank < BOARD_SIZE
    }

    /// Steps by a signed offset, returning `None` when it leaves the board.
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = u8::try_from(i16::from(self.file) + i16::from(file_delta)).ok()?;
        let rank = u8::try_from(i16::from(self.rank) + i16::from(rank_delta)).ok()?;
        Self::new(file, rank)
    }

    pub const fn file_letter(self) -> char {
        (b'a' + self.file) as char
    }

    /// Rank number as displayed next to the board.
    pub const fn rank_number(self) -> u8 {
        8 - self.rank
    }

    pub fn label(self) -> String {
        format!("{}{}", self.file_letter(), self.rank_number())
    }

    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.chars();
        let letter = chars.next()?;
        let number = chars.next()?.to_digit(10)?;
        if chars.next().is_some() || !('a'..='h').contains(&letter) || !(1..=8).contains(&number) {
            return None;
        }
        Self::new(letter as u8 - b'a', 8 - number as u8)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_letter(), self.rank_number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub color: Color,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

impl Move {
    pub const fn new(color: Color, piece: Piece, from: Square, to: Square) -> Self {
        Self {
            color,
            piece,
            from,
            to,
            captured: None,
        }
    }

    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// History notation, e.g. `e2 → e4`.
    pub fn notation(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }
}

/// Destination squares reachable from a single square.
pub type SquareList = ArrayVec<Square, 64>;

/// `(from, to)` pairs for every legal move of one side.
pub type MoveList = ArrayVec<(Square, Square), 1024>;
