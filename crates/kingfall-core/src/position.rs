use thiserror::Error;

use crate::board::Board;
use crate::fen::{encode_fen, parse_fen, ParsedFen};
use crate::game::{evaluate_status, Status};
use crate::movegen::{generate_all_moves, has_any_move, legal_destinations};
use crate::rules::is_legal;
use crate::types::{Color, Move, MoveList, Piece, Square, SquareList};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("{0}")]
    Fen(String),
}

/// Authoritative session state. Only [`GameState::apply_move`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Color,
    status: Status,
    history: Vec<Move>,
    captured: [Vec<Piece>; 2],
    last_move: Option<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::from_parsed(ParsedFen {
            board: Board::new(),
            turn: Color::White,
        })
    }

    /// Starts a session from a board notation string. A board already missing
    /// a king loads as finished.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let parsed = parse_fen(fen).map_err(|err| PositionError::Fen(err.to_string()))?;
        Ok(Self::from_parsed(parsed))
    }

    pub fn fen(&self) -> String {
        encode_fen(&ParsedFen {
            board: self.board,
            turn: self.turn,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Pieces of `color` that have been captured, oldest first.
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        is_legal(&self.board, from, to, self.turn)
    }

    pub fn legal_destinations(&self, from: Square) -> SquareList {
        legal_destinations(&self.board, from, self.turn)
    }

    /// All legal moves for the side to move; empty once the game is over.
    pub fn moves(&self) -> MoveList {
        if self.status.is_over() {
            MoveList::new()
        } else {
            generate_all_moves(&self.board, self.turn)
        }
    }

    pub fn has_any_move(&self) -> bool {
        !self.status.is_over() && has_any_move(&self.board, self.turn)
    }

    /// Plays `from → to` for the side to move and returns the recorded move.
    ///
    /// # Panics
    ///
    /// Panics if the move does not pass [`is_legal`]; callers validate first.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Move {
        assert!(
            self.is_legal(from, to),
            "apply_move called with an unvalidated move {from} → {to}"
        );

        let piece = self
            .board
            .remove(from)
            .expect("source square from legal move must be in bounds")
            .expect("source square from legal move must be occupied");
        let captured = self
            .board
            .put(piece, to)
            .expect("destination square from legal move must be in bounds");

        if let Some(taken) = captured {
            self.captured[taken.color.index()].push(taken);
        }

        let mv = Move {
            captured,
            ..Move::new(self.turn, piece, from, to)
        };
        self.history.push(mv);
        self.last_move = Some(mv);
        self.turn = self.turn.opposite();
        self.status = evaluate_status(&self.board, self.turn);
        mv
    }

    fn from_parsed(parsed: ParsedFen) -> Self {
        Self {
            status: evaluate_status(&parsed.board, parsed.turn),
            board: parsed.board,
            turn: parsed.turn,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            last_move: None,
        }
    }
}
