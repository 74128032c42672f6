pub mod board;
pub mod constants;
pub mod controller;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod position;
pub mod rules;
pub mod types;

pub use board::{Board, BoardError};
pub use constants::{BOARD_SIZE, SQUARES};
pub use controller::{ClickOutcome, GameController, GameEvent, MoveOutcome, Selection, Snapshot};
pub use fen::{encode_fen, parse_fen, validate_fen, FenError, ParsedFen, STARTING_POSITION};
pub use game::{evaluate_status, is_king_captured, Status};
pub use movegen::{generate_all_moves, has_any_move, legal_destinations};
pub use notation::{parse_move, parse_square, NotationError};
pub use position::{GameState, PositionError};
pub use rules::is_legal;
pub use types::{Color, Move, MoveList, Piece, PieceType, Square, SquareList};
